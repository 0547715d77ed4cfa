//! Property tests for macro and conditional state.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use vlog_preproc::{PreprocError, PreprocessorContext};

#[derive(Clone, Debug)]
enum MacroOp {
    Define(usize, u8),
    Undef(usize),
}

const NAMES: [&str; 4] = ["A", "B", "C", "D"];

fn macro_op() -> impl Strategy<Value = MacroOp> {
    prop_oneof![
        (0..NAMES.len(), any::<u8>()).prop_map(|(name, value)| MacroOp::Define(name, value)),
        (0..NAMES.len()).prop_map(MacroOp::Undef),
    ]
}

proptest! {
    /// After any history of defines and undefs, each macro holds its last
    /// defined value unless it was undefined afterwards.
    #[test]
    fn macro_table_tracks_last_definition(ops in prop::collection::vec(macro_op(), 0..40)) {
        let mut ctx = PreprocessorContext::new();
        let mut expected: BTreeMap<&str, String> = BTreeMap::new();

        for (line, op) in (1u32..).zip(&ops) {
            match *op {
                MacroOp::Define(name, value) => {
                    ctx.define(line, NAMES[name], &value.to_string()).unwrap();
                    expected.insert(NAMES[name], value.to_string());
                }
                MacroOp::Undef(name) => {
                    ctx.undefine(line, NAMES[name]);
                    expected.remove(NAMES[name]);
                }
            }
        }

        for name in NAMES {
            prop_assert_eq!(ctx.expand(name), expected.get(name).map(String::as_str));
        }
        prop_assert_eq!(ctx.macros().len(), expected.len());
    }

    /// `ifdef X ... else ... endif` emits in exactly one branch, and the
    /// state after `endif` matches the state before `ifdef`.
    #[test]
    fn ifdef_else_selects_one_branch(
        defined in prop::collection::vec(any::<bool>(), NAMES.len()),
        tests in prop::collection::vec((0..NAMES.len(), any::<bool>()), 1..6),
    ) {
        let mut ctx = PreprocessorContext::new();
        for (name, is_defined) in NAMES.iter().zip(&defined) {
            if *is_defined {
                ctx.define(1, name, "").unwrap();
            }
        }

        // Open every conditional nested in the previous true branch.
        let mut enclosing_active = true;
        for (depth, &(name, negated)) in tests.iter().enumerate() {
            let line = u32::try_from(depth).unwrap();
            if negated {
                ctx.ifndef(line, NAMES[name]);
            } else {
                ctx.ifdef(line, NAMES[name]);
            }
            let selected = defined[name] != negated;
            prop_assert_eq!(ctx.emit(), enclosing_active && selected);
            enclosing_active = enclosing_active && selected;
        }

        // Walk back out through the else branches.
        let mut active: Vec<bool> = Vec::new();
        let mut outer = true;
        for &(name, negated) in &tests {
            let selected = defined[name] != negated;
            active.push(outer);
            outer = outer && selected;
        }
        for (&(name, negated), &outer_active) in tests.iter().zip(&active).rev() {
            let selected = defined[name] != negated;
            ctx.else_branch(100).unwrap();
            prop_assert_eq!(ctx.emit(), outer_active && !selected);
            ctx.endif(101).unwrap();
            prop_assert_eq!(ctx.emit(), outer_active);
        }

        prop_assert_eq!(ctx.conditional_depth(), 0);
        prop_assert!(ctx.emit());
    }

    /// More `endif`s than open conditionals is always an error and never
    /// disturbs emission.
    #[test]
    fn extra_endif_is_rejected(depth in 0usize..5) {
        let mut ctx = PreprocessorContext::new();
        for line in 0..depth {
            ctx.ifdef(u32::try_from(line).unwrap(), "UNSET");
        }
        for line in 0..depth {
            prop_assert!(ctx.endif(u32::try_from(line).unwrap()).is_ok());
        }
        prop_assert_eq!(ctx.endif(99), Err(PreprocError::StrayEndif { line: 99 }));
        prop_assert!(ctx.emit());
    }
}
