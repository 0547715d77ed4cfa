//! Expression Types
//!
//! Numbers, expressions, concatenations and assignment targets.

use crate::containers::AstList;
use crate::{ExprId, IdentId, Name};

use super::Operator;

/// Radix of a based number literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl NumberBase {
    /// Base character as written after the `'` (`b`, `o`, `d`, `h`).
    pub fn as_char(self) -> char {
        match self {
            NumberBase::Binary => 'b',
            NumberBase::Octal => 'o',
            NumberBase::Decimal => 'd',
            NumberBase::Hex => 'h',
        }
    }

    /// Parse a base character, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(NumberBase::Binary),
            'o' => Some(NumberBase::Octal),
            'd' => Some(NumberBase::Decimal),
            'h' => Some(NumberBase::Hex),
            _ => None,
        }
    }
}

/// Number literal. Digits are kept as source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Number {
    /// Plain decimal literal such as `42`.
    Unsized(Name),
    /// Real literal such as `1.5` or `2e-3`.
    Real(Name),
    /// Based literal such as `8'hFF` or `'sb101`.
    Based {
        width: Option<u32>,
        signed: bool,
        base: NumberBase,
        digits: Name,
    },
}

/// Concatenation `{a, b}` or replication `{n{a, b}}`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Concatenation {
    /// Replication count, if this is a replication.
    pub repeat: Option<ExprId>,
    pub items: AstList<ExprId>,
}

impl Concatenation {
    /// Start a concatenation with its first element.
    pub fn new(first: ExprId) -> Self {
        let mut items = AstList::new();
        items.push(first);
        Concatenation {
            repeat: None,
            items,
        }
    }

    /// Start an empty concatenation; the grammar appends items as it reads them.
    pub fn empty() -> Self {
        Concatenation {
            repeat: None,
            items: AstList::new(),
        }
    }

    /// Turn this concatenation into a replication.
    #[must_use]
    pub fn replicated(mut self, count: ExprId) -> Self {
        self.repeat = Some(count);
        self
    }

    /// Append an element.
    pub fn extend(&mut self, item: ExprId) {
        self.items.push(item);
    }
}

/// Function call, user-defined or system.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionCall {
    pub name: IdentId,
    pub args: AstList<ExprId>,
    /// `$name(...)` call.
    pub system: bool,
    /// Call appears in a constant expression context.
    pub constant: bool,
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Number(Number),
    Ident(IdentId),
    /// String literal (without the quotes).
    String(Name),
    /// Use of a text macro, `` `NAME ``.
    MacroUse(Name),
    Unary {
        op: Operator,
        operand: ExprId,
    },
    Binary {
        op: Operator,
        left: ExprId,
        right: ExprId,
    },
    /// `condition ? if_true : if_false`
    Conditional {
        condition: ExprId,
        if_true: ExprId,
        if_false: ExprId,
    },
    /// Part-select bounds `high:low`.
    Range {
        high: ExprId,
        low: ExprId,
    },
    /// Indexed part-select `base +: width` / `base -: width`.
    IndexedRange {
        base: ExprId,
        width: ExprId,
        ascending: bool,
    },
    /// Bit-select index.
    Index(ExprId),
    /// `min:typ:max`
    MinTypMax {
        min: ExprId,
        typ: ExprId,
        max: ExprId,
    },
    FunctionCall(FunctionCall),
    Concatenation(Concatenation),
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }

    /// Returns `true` for literal numbers and strings.
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Number(_) | ExprKind::String(_))
    }
}

/// Assignment target.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LValue {
    /// Net identifier (continuous assignment target).
    Net(IdentId),
    /// Variable identifier (procedural assignment target).
    Var(IdentId),
    /// Genvar identifier (generate loop variable).
    Genvar(IdentId),
    /// Concatenation of net targets.
    NetConcat(Concatenation),
    /// Concatenation of variable targets.
    VarConcat(Concatenation),
}

impl LValue {
    /// The target identifier, unless the target is a concatenation.
    pub fn ident(&self) -> Option<IdentId> {
        match self {
            LValue::Net(id) | LValue::Var(id) | LValue::Genvar(id) => Some(*id),
            LValue::NetConcat(_) | LValue::VarConcat(_) => None,
        }
    }
}
