//! Source-like rendering of finished nodes.
//!
//! Used for diagnostics and by consumers that label nodes (schematic views,
//! dumps). Binary and conditional expressions are fully parenthesised, so the
//! output never depends on operator precedence.

use crate::ast::{Concatenation, ExprKind, IdentQualifier, Number, Operator};
use crate::{AstArena, ExprId, IdentId};

/// `a.b[3].c[7:0]`
pub fn identifier_to_string(arena: &AstArena, id: IdentId) -> String {
    let mut out = String::new();
    write_identifier(arena, id, &mut out);
    out
}

pub fn operator_to_string(op: Operator) -> &'static str {
    op.as_str()
}

/// `42`, `1.5`, `8'hff`, `'sb101`
pub fn number_to_string(arena: &AstArena, number: Number) -> String {
    let mut out = String::new();
    write_number(arena, number, &mut out);
    out
}

pub fn expression_to_string(arena: &AstArena, id: ExprId) -> String {
    let mut out = String::new();
    write_expr(arena, id, &mut out);
    out
}

fn write_identifier(arena: &AstArena, id: IdentId, out: &mut String) {
    for (i, segment) in arena.identifier_chain(id).into_iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        let ident = arena.get_ident(segment);
        out.push_str(arena.name_str(ident.name));
        match ident.qualifier {
            IdentQualifier::None => {}
            IdentQualifier::Index(index) => {
                out.push('[');
                write_expr(arena, index, out);
                out.push(']');
            }
            IdentQualifier::Range { high, low } => {
                out.push('[');
                write_expr(arena, high, out);
                out.push(':');
                write_expr(arena, low, out);
                out.push(']');
            }
        }
    }
}

fn write_number(arena: &AstArena, number: Number, out: &mut String) {
    match number {
        Number::Unsized(text) | Number::Real(text) => out.push_str(arena.name_str(text)),
        Number::Based {
            width,
            signed,
            base,
            digits,
        } => {
            if let Some(width) = width {
                out.push_str(&width.to_string());
            }
            out.push('\'');
            if signed {
                out.push('s');
            }
            out.push(base.as_char());
            out.push_str(arena.name_str(digits));
        }
    }
}

fn write_list(arena: &AstArena, items: impl IntoIterator<Item = ExprId>, out: &mut String) {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_expr(arena, item, out);
    }
}

fn write_concat(arena: &AstArena, concat: &Concatenation, out: &mut String) {
    out.push('{');
    if let Some(count) = concat.repeat {
        write_expr(arena, count, out);
        out.push('{');
    }
    write_list(arena, concat.items.iter().copied(), out);
    if concat.repeat.is_some() {
        out.push('}');
    }
    out.push('}');
}

fn write_expr(arena: &AstArena, id: ExprId, out: &mut String) {
    match &arena.get_expr(id).kind {
        ExprKind::Number(number) => write_number(arena, *number, out),
        ExprKind::Ident(ident) => write_identifier(arena, *ident, out),
        ExprKind::String(text) => {
            out.push('"');
            out.push_str(arena.name_str(*text));
            out.push('"');
        }
        ExprKind::MacroUse(name) => {
            out.push('`');
            out.push_str(arena.name_str(*name));
        }
        ExprKind::Unary { op, operand } => {
            out.push_str(op.as_str());
            write_expr(arena, *operand, out);
        }
        ExprKind::Binary { op, left, right } => {
            out.push('(');
            write_expr(arena, *left, out);
            out.push(' ');
            out.push_str(op.as_str());
            out.push(' ');
            write_expr(arena, *right, out);
            out.push(')');
        }
        ExprKind::Conditional {
            condition,
            if_true,
            if_false,
        } => {
            out.push('(');
            write_expr(arena, *condition, out);
            out.push_str(" ? ");
            write_expr(arena, *if_true, out);
            out.push_str(" : ");
            write_expr(arena, *if_false, out);
            out.push(')');
        }
        ExprKind::Range { high, low } => {
            write_expr(arena, *high, out);
            out.push(':');
            write_expr(arena, *low, out);
        }
        ExprKind::IndexedRange {
            base,
            width,
            ascending,
        } => {
            write_expr(arena, *base, out);
            out.push_str(if *ascending { " +: " } else { " -: " });
            write_expr(arena, *width, out);
        }
        ExprKind::Index(index) => write_expr(arena, *index, out),
        ExprKind::MinTypMax { min, typ, max } => {
            write_expr(arena, *min, out);
            out.push(':');
            write_expr(arena, *typ, out);
            out.push(':');
            write_expr(arena, *max, out);
        }
        ExprKind::FunctionCall(call) => {
            write_identifier(arena, call.name, out);
            out.push('(');
            write_list(arena, call.args.iter().copied(), out);
            out.push(')');
        }
        ExprKind::Concatenation(concat) => write_concat(arena, concat, out),
    }
}

#[cfg(test)]
mod tests;
