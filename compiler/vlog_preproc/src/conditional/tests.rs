#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

fn defined(names: &[&str]) -> PreprocessorContext {
    let mut ctx = PreprocessorContext::new();
    for name in names {
        ctx.define(1, name, "").unwrap();
    }
    ctx
}

#[test]
fn test_ifdef_undefined_then_else() {
    let mut ctx = PreprocessorContext::new();

    ctx.ifdef(1, "A");
    assert!(!ctx.emit());

    ctx.else_branch(3).unwrap();
    assert!(ctx.emit());

    ctx.endif(5).unwrap();
    assert!(ctx.emit());
    assert_eq!(ctx.conditional_depth(), 0);
}

#[test]
fn test_ifdef_defined_skips_else() {
    let mut ctx = defined(&["A"]);
    ctx.ifdef(1, "A");
    assert!(ctx.emit());
    ctx.else_branch(2).unwrap();
    assert!(!ctx.emit());
    ctx.endif(3).unwrap();
    assert!(ctx.emit());
}

#[test]
fn test_ifndef_inverts() {
    let mut ctx = defined(&["A"]);
    ctx.ifndef(1, "A");
    assert!(!ctx.emit());
    ctx.endif(2).unwrap();

    ctx.ifndef(3, "B");
    assert!(ctx.emit());
    let frame = ctx.current_conditional().unwrap();
    assert!(frame.is_ndef);
    assert_eq!(frame.condition.as_deref(), Some("B"));
}

#[test]
fn test_first_matching_elsif_wins() {
    let mut ctx = defined(&["B", "C"]);
    ctx.ifdef(1, "A");
    assert!(!ctx.emit());

    ctx.elsif(2, "B").unwrap();
    assert!(ctx.emit());

    // C is defined too, but B already won.
    ctx.elsif(3, "C").unwrap();
    assert!(!ctx.emit());

    ctx.else_branch(4).unwrap();
    assert!(!ctx.emit());

    ctx.endif(5).unwrap();
    assert!(ctx.emit());
}

#[test]
fn test_elsif_after_ifndef_tests_definedness() {
    let mut ctx = defined(&["A", "B"]);
    ctx.ifndef(1, "A");
    assert!(!ctx.emit());
    ctx.elsif(2, "B").unwrap();
    assert!(ctx.emit());
    assert!(!ctx.current_conditional().unwrap().is_ndef);
}

#[test]
fn test_nested_in_false_branch_stays_suppressed() {
    let mut ctx = defined(&["INNER"]);
    ctx.ifdef(1, "OUTER");
    ctx.ifdef(2, "INNER");
    assert!(!ctx.emit());

    // Nothing inside a skipped region can be selected.
    ctx.else_branch(3).unwrap();
    assert!(!ctx.emit());
    ctx.endif(4).unwrap();
    assert!(!ctx.emit());

    ctx.else_branch(5).unwrap();
    assert!(ctx.emit());
    ctx.endif(6).unwrap();
    assert!(ctx.emit());
}

#[test]
fn test_nested_in_true_branch() {
    let mut ctx = defined(&["OUTER"]);
    ctx.ifdef(1, "OUTER");
    ctx.ifdef(2, "INNER");
    assert!(!ctx.emit());
    ctx.else_branch(3).unwrap();
    assert!(ctx.emit());
    ctx.endif(4).unwrap();
    assert!(ctx.emit());
    assert_eq!(ctx.conditional_depth(), 1);
}

#[test]
fn test_stray_endif() {
    let mut ctx = PreprocessorContext::new();
    assert_eq!(ctx.endif(7), Err(PreprocError::StrayEndif { line: 7 }));
    assert!(ctx.emit());
}

#[test]
fn test_else_and_elsif_without_ifdef() {
    let mut ctx = PreprocessorContext::new();
    assert_eq!(
        ctx.else_branch(2),
        Err(PreprocError::ElseWithoutIfdef { line: 2 })
    );
    assert_eq!(
        ctx.elsif(3, "A"),
        Err(PreprocError::ElsifWithoutIfdef { line: 3 })
    );
}

#[test]
fn test_branches_after_else_are_rejected() {
    let mut ctx = PreprocessorContext::new();
    ctx.ifdef(1, "A");
    ctx.else_branch(2).unwrap();
    assert_eq!(
        ctx.else_branch(3),
        Err(PreprocError::DuplicateElse { line: 3 })
    );
    assert_eq!(
        ctx.elsif(4, "B"),
        Err(PreprocError::ElsifAfterElse { line: 4 })
    );
    // The frame survives the errors.
    assert!(ctx.emit());
    ctx.endif(5).unwrap();
}
