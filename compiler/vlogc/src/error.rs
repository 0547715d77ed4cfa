use thiserror::Error;

/// A syntax error reported by the grammar.
///
/// Errors are collected on the session; reporting one never stops parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct SyntaxError {
    pub line: u32,
    pub message: String,
}
