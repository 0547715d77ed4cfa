//! Preprocessor errors.

use thiserror::Error;

/// Misuse of a compiler directive.
///
/// Every variant carries the line of the offending directive.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreprocError {
    #[error("line {line}: `endif without a matching `ifdef or `ifndef")]
    StrayEndif { line: u32 },

    #[error("line {line}: `elsif without a matching `ifdef or `ifndef")]
    ElsifWithoutIfdef { line: u32 },

    #[error("line {line}: `else without a matching `ifdef or `ifndef")]
    ElseWithoutIfdef { line: u32 },

    #[error("line {line}: `elsif after `else")]
    ElsifAfterElse { line: u32 },

    #[error("line {line}: second `else for the same conditional")]
    DuplicateElse { line: u32 },

    #[error("line {line}: `unconnected_drive expects pull0 or pull1, found `{found}`")]
    InvalidUnconnectedDrive { line: u32, found: String },

    #[error("line {line}: unknown net type `{found}`")]
    UnknownNetType { line: u32, found: String },

    #[error("line {line}: malformed directive: {message}")]
    MalformedDirective { line: u32, message: String },

    #[error("line {line}: use of undefined macro `{name}`")]
    UndefinedMacro { line: u32, name: String },

    #[error("line {line}: no included file is open")]
    IncludeStackEmpty { line: u32 },
}

impl PreprocError {
    /// Line of the directive that caused the error.
    pub fn line(&self) -> u32 {
        match self {
            Self::StrayEndif { line }
            | Self::ElsifWithoutIfdef { line }
            | Self::ElseWithoutIfdef { line }
            | Self::ElsifAfterElse { line }
            | Self::DuplicateElse { line }
            | Self::InvalidUnconnectedDrive { line, .. }
            | Self::UnknownNetType { line, .. }
            | Self::MalformedDirective { line, .. }
            | Self::UndefinedMacro { line, .. }
            | Self::IncludeStackEmpty { line } => *line,
        }
    }

    pub(crate) fn malformed(line: u32, message: impl Into<String>) -> Self {
        Self::MalformedDirective {
            line,
            message: message.into(),
        }
    }
}
