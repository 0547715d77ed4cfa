#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use std::path::PathBuf;

use super::*;
use pretty_assertions::assert_eq;

fn no_files(_file: &str, _dirs: &[PathBuf]) -> Option<PathBuf> {
    None
}

fn parse(text: &str) -> Directive {
    Directive::parse(1, text).unwrap()
}

#[test]
fn test_parse_define() {
    assert_eq!(
        parse("`define WIDTH  8 "),
        Directive::Define {
            name: "WIDTH".to_owned(),
            value: "8".to_owned()
        }
    );
    assert_eq!(
        parse("`define FLAG"),
        Directive::Define {
            name: "FLAG".to_owned(),
            value: String::new()
        }
    );
}

#[test]
fn test_parse_conditionals() {
    assert_eq!(parse("`ifdef A"), Directive::Ifdef("A".to_owned()));
    assert_eq!(parse("`ifndef B_2"), Directive::Ifndef("B_2".to_owned()));
    assert_eq!(parse("`elsif C"), Directive::Elsif("C".to_owned()));
    assert_eq!(parse("`else"), Directive::Else);
    assert_eq!(parse("`endif"), Directive::Endif);
    assert!(parse("`endif").is_conditional());
    assert!(!parse("`resetall").is_conditional());
}

#[test]
fn test_parse_simple_directives() {
    assert_eq!(parse("`celldefine"), Directive::CellDefine);
    assert_eq!(parse("`endcelldefine"), Directive::EndCellDefine);
    assert_eq!(parse("`nounconnected_drive"), Directive::NoUnconnectedDrive);
    assert_eq!(
        parse("`default_nettype none"),
        Directive::DefaultNetType(NetType::None)
    );
    assert_eq!(
        parse("`unconnected_drive pull1"),
        Directive::UnconnectedDrive(PrimitiveStrength::Pull1)
    );
}

#[test]
fn test_parse_include_forms() {
    assert_eq!(parse("`include \"defs.vh\""), Directive::Include("defs.vh".to_owned()));
    assert_eq!(parse("`include <defs.vh>"), Directive::Include("defs.vh".to_owned()));
}

#[test]
fn test_parse_timescale() {
    assert_eq!(
        parse("`timescale 1 ns / 10 ps"),
        Directive::Timescale {
            unit: "1ns".to_owned(),
            precision: "10ps".to_owned()
        }
    );
    assert!(Directive::parse(1, "`timescale 2ns/1ps").is_err());
    assert!(Directive::parse(1, "`timescale 1ns").is_err());
}

#[test]
fn test_parse_line() {
    assert_eq!(
        parse("`line 12 \"gen.v\" 2"),
        Directive::Line {
            line: 12,
            file: "gen.v".to_owned(),
            level: 2
        }
    );
    assert!(Directive::parse(1, "`line 12 \"gen.v\" 3").is_err());
    assert!(Directive::parse(1, "`line x \"gen.v\" 0").is_err());
}

#[test]
fn test_parse_macro_use() {
    assert_eq!(parse("`WIDTH"), Directive::MacroUse("WIDTH".to_owned()));
}

#[test]
fn test_parse_strips_line_comments() {
    assert_eq!(parse("`endif // FEATURE"), Directive::Endif);
    assert_eq!(
        parse("`ifdef FEATURE // optional block"),
        Directive::Ifdef("FEATURE".to_owned())
    );
    assert_eq!(
        parse("`define WIDTH 8 // bus width"),
        Directive::Define {
            name: "WIDTH".to_owned(),
            value: "8".to_owned()
        }
    );
    assert_eq!(parse("`celldefine//cell"), Directive::CellDefine);
}

#[test]
fn test_parse_strips_block_comments() {
    assert_eq!(parse("`else /* no fast path */"), Directive::Else);
    assert_eq!(
        parse("`define SUM a /* lhs */ + b"),
        Directive::Define {
            name: "SUM".to_owned(),
            value: "a   + b".to_owned()
        }
    );
    assert_eq!(
        parse("`timescale 1ns /**/ / 1ps"),
        Directive::Timescale {
            unit: "1ns".to_owned(),
            precision: "1ps".to_owned()
        }
    );
}

#[test]
fn test_comment_markers_inside_strings_are_kept() {
    assert_eq!(
        parse("`include \"dir//defs.vh\" // shared"),
        Directive::Include("dir//defs.vh".to_owned())
    );
    assert_eq!(
        parse("`define MSG \"a // b\""),
        Directive::Define {
            name: "MSG".to_owned(),
            value: "\"a // b\"".to_owned()
        }
    );
}

#[test]
fn test_commented_define_expands_without_comment() {
    let mut ctx = PreprocessorContext::new();
    ctx.apply(1, parse("`define WIDTH 8 // bus width"), &no_files)
        .unwrap();
    assert_eq!(ctx.expand("WIDTH"), Some("8"));
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Directive::parse(5, "`default_nettype bogus"),
        Err(PreprocError::UnknownNetType {
            line: 5,
            found: "bogus".to_owned()
        })
    );
    assert_eq!(
        Directive::parse(6, "`unconnected_drive weak0"),
        Err(PreprocError::InvalidUnconnectedDrive {
            line: 6,
            found: "weak0".to_owned()
        })
    );
    assert_eq!(Directive::parse(7, "define A").unwrap_err().line(), 7);
    assert!(Directive::parse(1, "`").is_err());
    assert!(Directive::parse(1, "`ifdef").is_err());
    assert!(Directive::parse(1, "`ifdef A B").is_err());
    assert!(Directive::parse(1, "`else junk").is_err());
    assert!(Directive::parse(1, "`include defs.vh").is_err());
}

#[test]
fn test_apply_define_and_expand() {
    let mut ctx = PreprocessorContext::new();
    ctx.apply(1, parse("`define W 16"), &no_files).unwrap();
    assert_eq!(
        ctx.apply(2, parse("`W"), &no_files).unwrap(),
        Some("16".to_owned())
    );
    assert_eq!(
        ctx.apply(3, parse("`D"), &no_files),
        Err(PreprocError::UndefinedMacro {
            line: 3,
            name: "D".to_owned()
        })
    );
}

#[test]
fn test_apply_skips_directives_in_suppressed_region() {
    let mut ctx = PreprocessorContext::new();
    let lines = [
        "`ifdef MISSING",
        "`define HIDDEN 1",
        "`default_nettype none",
        "`UNDEFINED",
        "`else",
        "`define SHOWN 1",
        "`endif",
    ];
    for (index, text) in lines.iter().enumerate() {
        let line = u32::try_from(index).unwrap() + 1;
        ctx.apply(line, parse(text), &no_files).unwrap();
    }

    assert!(!ctx.is_defined("HIDDEN"));
    assert!(ctx.is_defined("SHOWN"));
    assert_eq!(ctx.current_net_type(), NetType::Wire);
    assert!(ctx.net_types().is_empty());
    assert!(ctx.emit());
}

#[test]
fn test_apply_include_uses_resolver() {
    let mut ctx = PreprocessorContext::new();
    ctx.apply(1, parse("`include \"a.vh\""), &no_files).unwrap();
    assert_eq!(ctx.current_file(), Some("a.vh"));
    assert_eq!(ctx.includes().len(), 1);
}

#[test]
fn test_apply_reports_conditional_errors() {
    let mut ctx = PreprocessorContext::new();
    assert_eq!(
        ctx.apply(9, Directive::Endif, &no_files),
        Err(PreprocError::StrayEndif { line: 9 })
    );
}
