#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_new_session_defines_macros() {
    let config = SessionConfig::new()
        .with_search_dir("inc")
        .with_macro("SIM", "1");
    let session = ParseSession::new(config).unwrap();

    assert_eq!(session.preprocessor().expand("SIM"), Some("1"));
    assert_eq!(session.preprocessor().search_dirs().len(), 1);
    assert!(session.tree().is_empty());
    assert!(!session.has_errors());
}

#[test]
fn test_empty_macro_name_is_rejected() {
    let config = SessionConfig::new().with_macro("", "1");
    assert!(matches!(
        ParseSession::new(config),
        Err(PreprocError::MalformedDirective { line: 0, .. })
    ));
}

#[test]
fn test_report_error_collects() {
    let mut session = ParseSession::new(SessionConfig::default()).unwrap();
    session.report_error(3, "unexpected token");
    session.report_error(9, String::from("missing endmodule"));

    assert!(session.has_errors());
    assert_eq!(
        session.errors(),
        &[
            SyntaxError {
                line: 3,
                message: "unexpected token".to_owned()
            },
            SyntaxError {
                line: 9,
                message: "missing endmodule".to_owned()
            },
        ]
    );
    assert_eq!(session.errors()[0].to_string(), "line 3: unexpected token");
}

#[test]
fn test_release_frees_everything() {
    let mut session = ParseSession::new(SessionConfig::new().with_source_len_hint(1024)).unwrap();
    let name = session.arena_mut().new_identifier("top", 1);
    let module = session
        .arena_mut()
        .new_module_declaration(name, 1)
        .finish(session.arena_mut());
    session.add_source(AstList::from(vec![SourceItem::Module(module)]));

    let allocated = session.arena().stats().bytes_allocated;
    let stats = session.release();
    assert!(allocated > 0);
    assert_eq!(stats.bytes_freed, stats.bytes_allocated);
    assert_eq!(stats.bytes_remaining(), 0);
}
