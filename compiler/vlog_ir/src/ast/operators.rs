//! Expression operators.

use std::fmt;

/// Unary and binary operators.
///
/// Several tokens are both unary and binary (`+`, `-`, `&`, `|`, `^`, `~^`);
/// the expression kind that holds the operator decides which reading applies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `**`
    Pow,
    /// `!`
    LogicalNot,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `~`
    BitNot,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `~^` or `^~`
    BitXnor,
    /// `~&`
    ReduceNand,
    /// `~|`
    ReduceNor,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `===`
    CaseEq,
    /// `!==`
    CaseNotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `<<<`
    AShl,
    /// `>>>`
    AShr,
}

impl Operator {
    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "**",
            Operator::LogicalNot => "!",
            Operator::LogicalAnd => "&&",
            Operator::LogicalOr => "||",
            Operator::BitNot => "~",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitXnor => "~^",
            Operator::ReduceNand => "~&",
            Operator::ReduceNor => "~|",
            Operator::Eq => "==",
            Operator::NotEq => "!=",
            Operator::CaseEq => "===",
            Operator::CaseNotEq => "!==",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::AShl => "<<<",
            Operator::AShr => ">>>",
        }
    }

    /// Returns `true` if the operator has a unary (prefix or reduction) form.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operator::Plus
                | Operator::Minus
                | Operator::LogicalNot
                | Operator::BitNot
                | Operator::BitAnd
                | Operator::BitOr
                | Operator::BitXor
                | Operator::BitXnor
                | Operator::ReduceNand
                | Operator::ReduceNor
        )
    }

    /// Returns `true` if the operator has a binary form.
    pub fn is_binary(self) -> bool {
        !matches!(
            self,
            Operator::LogicalNot | Operator::BitNot | Operator::ReduceNand | Operator::ReduceNor
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
