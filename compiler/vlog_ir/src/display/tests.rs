#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use crate::ast::Concatenation;
use crate::containers::AstList;
use pretty_assertions::assert_eq;

fn num(arena: &mut AstArena, text: &str) -> ExprId {
    let number = arena.new_number(text).unwrap();
    arena.new_number_expression(number, 1)
}

fn ident(arena: &mut AstArena, text: &str) -> ExprId {
    let id = arena.new_identifier(text, 1);
    arena.new_identifier_expression(id, 1)
}

#[test]
fn test_number_to_string() {
    let mut arena = AstArena::new();
    for text in ["42", "1.5", "8'hff", "'sb101", "4'bxz0?"] {
        let number = arena.new_number(text).unwrap();
        assert_eq!(number_to_string(&arena, number), text);
    }
}

#[test]
fn test_number_base_is_lowercased() {
    let mut arena = AstArena::new();
    let number = arena.new_number("16'HBEEF").unwrap();
    assert_eq!(number_to_string(&arena, number), "16'hBEEF");
}

#[test]
fn test_operator_to_string() {
    assert_eq!(operator_to_string(Operator::CaseNotEq), "!==");
    assert_eq!(operator_to_string(Operator::AShr), ">>>");
}

#[test]
fn test_hierarchical_identifier_to_string() {
    let mut arena = AstArena::new();
    let top = arena.new_identifier("top", 1);
    let u1 = arena.new_identifier("u1", 1);
    let data = arena.new_identifier("data", 1);
    let index = num(&mut arena, "3");
    let high = num(&mut arena, "7");
    let low = num(&mut arena, "0");
    arena.set_identifier_index(u1, index);
    arena.set_identifier_range(data, high, low);
    arena.append_identifier(top, u1);
    arena.append_identifier(top, data);

    assert_eq!(identifier_to_string(&arena, top), "top.u1[3].data[7:0]");
}

#[test]
fn test_binary_and_conditional_are_parenthesised() {
    let mut arena = AstArena::new();
    let a = ident(&mut arena, "a");
    let b = ident(&mut arena, "b");
    let sel = ident(&mut arena, "sel");
    let sum = arena.new_binary_expression(Operator::Plus, a, b, 1);
    let zero = num(&mut arena, "0");
    let cond = arena.new_conditional_expression(sel, sum, zero, 1);

    assert_eq!(expression_to_string(&arena, cond), "(sel ? (a + b) : 0)");
}

#[test]
fn test_unary_and_string() {
    let mut arena = AstArena::new();
    let a = ident(&mut arena, "a");
    let not_a = arena.new_unary_expression(Operator::BitNot, a, 1);
    let s = arena.new_string_expression("hello", 1);
    let m = arena.new_macro_expression("WIDTH", 1);

    assert_eq!(expression_to_string(&arena, not_a), "~a");
    assert_eq!(expression_to_string(&arena, s), "\"hello\"");
    assert_eq!(expression_to_string(&arena, m), "`WIDTH");
}

#[test]
fn test_concatenation_and_replication() {
    let mut arena = AstArena::new();
    let a = ident(&mut arena, "a");
    let b = ident(&mut arena, "b");
    let mut concat = Concatenation::new(a);
    concat.extend(b);
    let plain = arena.new_concatenation_expression(concat.clone(), 1);
    let four = num(&mut arena, "4");
    let repl = arena.new_replication_expression(four, concat, 1);

    assert_eq!(expression_to_string(&arena, plain), "{a, b}");
    assert_eq!(expression_to_string(&arena, repl), "{4{a, b}}");
}

#[test]
fn test_function_call_and_ranges() {
    let mut arena = AstArena::new();
    let name = arena.new_system_identifier("$clog2", 1);
    let depth = ident(&mut arena, "DEPTH");
    let call = arena.new_function_call(name, AstList::from(vec![depth]), true, 1);
    let base = ident(&mut arena, "i");
    let width = num(&mut arena, "8");
    let part = arena.new_indexed_range_expression(base, width, true, 1);
    let one = num(&mut arena, "1");
    let two = num(&mut arena, "2");
    let three = num(&mut arena, "3");
    let mtm = arena.new_mintypmax_expression(one, two, three, 1);

    assert_eq!(expression_to_string(&arena, call), "$clog2(DEPTH)");
    assert_eq!(expression_to_string(&arena, part), "i +: 8");
    assert_eq!(expression_to_string(&arena, mtm), "1:2:3");
}
