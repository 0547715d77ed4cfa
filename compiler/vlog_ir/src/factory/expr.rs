//! Number, expression and lvalue constructors.

use crate::ast::{
    Concatenation, Expr, ExprKind, FunctionCall, IdentRole, LValue, Number, NumberBase, Operator,
};
use crate::containers::AstList;
use crate::{AstArena, ExprId, IdentId};

impl AstArena {
    // ===== Numbers =====

    /// Parse a number literal as written in source.
    ///
    /// Accepts unsized decimals (`42`, `1_000`), reals (`1.5`, `2e-3`,
    /// `1.0E+2`) and based literals (`8'hFF`, `'sb101`, `4'bxz0?`). Digits
    /// are stored as written. Returns `None` for malformed text.
    pub fn new_number(&mut self, text: &str) -> Option<Number> {
        let text = text.trim();
        if let Some((size, rest)) = text.split_once('\'') {
            return self.new_based_number(size.trim(), rest);
        }
        if is_decimal(text) {
            return Some(Number::Unsized(self.intern(text)));
        }
        if is_real(text) {
            return Some(Number::Real(self.intern(text)));
        }
        None
    }

    fn new_based_number(&mut self, size: &str, rest: &str) -> Option<Number> {
        let width = if size.is_empty() {
            None
        } else {
            if !is_decimal(size) {
                return None;
            }
            let width: u32 = size.replace('_', "").parse().ok()?;
            if width == 0 {
                return None;
            }
            Some(width)
        };

        let mut chars = rest.chars();
        let mut marker = chars.next()?;
        let signed = matches!(marker, 's' | 'S');
        if signed {
            marker = chars.next()?;
        }
        let base = NumberBase::from_char(marker)?;
        let digits = chars.as_str().trim();
        if digits.is_empty() || !digits.chars().all(|c| is_based_digit(base, c)) {
            return None;
        }

        Some(Number::Based {
            width,
            signed,
            base,
            digits: self.intern(digits),
        })
    }

    // ===== Expressions =====

    fn new_expression(&mut self, kind: ExprKind, line: u32) -> ExprId {
        self.alloc_expr(Expr::new(kind, line))
    }

    pub fn new_number_expression(&mut self, number: Number, line: u32) -> ExprId {
        self.new_expression(ExprKind::Number(number), line)
    }

    pub fn new_identifier_expression(&mut self, ident: IdentId, line: u32) -> ExprId {
        self.new_expression(ExprKind::Ident(ident), line)
    }

    /// String literal; `text` excludes the quotes.
    pub fn new_string_expression(&mut self, text: &str, line: u32) -> ExprId {
        let name = self.intern(text);
        self.new_expression(ExprKind::String(name), line)
    }

    /// Use of text macro `name` (without the backtick).
    pub fn new_macro_expression(&mut self, name: &str, line: u32) -> ExprId {
        let name = self.intern(name);
        self.new_expression(ExprKind::MacroUse(name), line)
    }

    pub fn new_unary_expression(&mut self, op: Operator, operand: ExprId, line: u32) -> ExprId {
        debug_assert!(op.is_unary(), "{op} is not a unary operator");
        self.new_expression(ExprKind::Unary { op, operand }, line)
    }

    pub fn new_binary_expression(
        &mut self,
        op: Operator,
        left: ExprId,
        right: ExprId,
        line: u32,
    ) -> ExprId {
        debug_assert!(op.is_binary(), "{op} is not a binary operator");
        self.new_expression(ExprKind::Binary { op, left, right }, line)
    }

    pub fn new_conditional_expression(
        &mut self,
        condition: ExprId,
        if_true: ExprId,
        if_false: ExprId,
        line: u32,
    ) -> ExprId {
        self.new_expression(
            ExprKind::Conditional {
                condition,
                if_true,
                if_false,
            },
            line,
        )
    }

    pub fn new_range_expression(&mut self, high: ExprId, low: ExprId, line: u32) -> ExprId {
        self.new_expression(ExprKind::Range { high, low }, line)
    }

    /// `base +: width` when `ascending`, otherwise `base -: width`.
    pub fn new_indexed_range_expression(
        &mut self,
        base: ExprId,
        width: ExprId,
        ascending: bool,
        line: u32,
    ) -> ExprId {
        self.new_expression(
            ExprKind::IndexedRange {
                base,
                width,
                ascending,
            },
            line,
        )
    }

    pub fn new_index_expression(&mut self, index: ExprId, line: u32) -> ExprId {
        self.new_expression(ExprKind::Index(index), line)
    }

    pub fn new_mintypmax_expression(
        &mut self,
        min: ExprId,
        typ: ExprId,
        max: ExprId,
        line: u32,
    ) -> ExprId {
        self.new_expression(ExprKind::MinTypMax { min, typ, max }, line)
    }

    /// Function call. A system identifier makes it a system function call.
    pub fn new_function_call(
        &mut self,
        name: IdentId,
        args: AstList<ExprId>,
        constant: bool,
        line: u32,
    ) -> ExprId {
        let system = self.get_ident(name).is_system();
        if !system {
            self.set_identifier_role(name, IdentRole::Function);
        }
        self.new_expression(
            ExprKind::FunctionCall(FunctionCall {
                name,
                args,
                system,
                constant,
            }),
            line,
        )
    }

    /// Concatenation or, if `concat.repeat` is set, replication.
    pub fn new_concatenation_expression(&mut self, concat: Concatenation, line: u32) -> ExprId {
        self.new_expression(ExprKind::Concatenation(concat), line)
    }

    /// `{count{items}}`
    pub fn new_replication_expression(
        &mut self,
        count: ExprId,
        items: Concatenation,
        line: u32,
    ) -> ExprId {
        self.new_concatenation_expression(items.replicated(count), line)
    }

    // ===== Lvalues =====

    pub fn new_net_lvalue(&mut self, ident: IdentId) -> LValue {
        self.set_identifier_role(ident, IdentRole::Net);
        LValue::Net(ident)
    }

    pub fn new_var_lvalue(&mut self, ident: IdentId) -> LValue {
        self.set_identifier_role(ident, IdentRole::Reg);
        LValue::Var(ident)
    }

    pub fn new_genvar_lvalue(&mut self, ident: IdentId) -> LValue {
        self.set_identifier_role(ident, IdentRole::Genvar);
        LValue::Genvar(ident)
    }

    pub fn new_net_concat_lvalue(&mut self, concat: Concatenation) -> LValue {
        LValue::NetConcat(concat)
    }

    pub fn new_var_concat_lvalue(&mut self, concat: Concatenation) -> LValue {
        LValue::VarConcat(concat)
    }
}

/// Decimal digits with optional `_` separators, starting with a digit.
fn is_decimal(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '_')
}

/// `1.5`, `1e3`, `1.5E-3`
fn is_real(text: &str) -> bool {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };
    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => is_decimal(int) && is_decimal(frac),
        None => exponent.is_some() && is_decimal(mantissa),
    };
    let exponent_ok = exponent.map_or(true, |exp| {
        is_decimal(exp.strip_prefix(['+', '-']).unwrap_or(exp))
    });
    mantissa_ok && exponent_ok
}

fn is_based_digit(base: NumberBase, c: char) -> bool {
    if matches!(c, '_' | 'x' | 'X' | 'z' | 'Z' | '?') {
        return true;
    }
    match base {
        NumberBase::Binary => matches!(c, '0' | '1'),
        NumberBase::Octal => matches!(c, '0'..='7'),
        NumberBase::Decimal => c.is_ascii_digit(),
        NumberBase::Hex => c.is_ascii_hexdigit(),
    }
}
