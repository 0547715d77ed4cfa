//! Session configuration.

use std::path::PathBuf;

/// How a [`ParseSession`](crate::ParseSession) is set up.
///
/// `Default` is an empty configuration: no search directories, no
/// predefined macros, no arena pre-sizing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// `` `include `` search directories, searched in order.
    pub search_dirs: Vec<PathBuf>,
    /// Macros defined before the first line is read (`+define+NAME=VALUE`).
    pub predefined_macros: Vec<(String, String)>,
    /// Total source size in bytes, used to pre-size the arena.
    pub source_len_hint: Option<usize>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    #[must_use]
    pub fn with_macro(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.predefined_macros.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_source_len_hint(mut self, bytes: usize) -> Self {
        self.source_len_hint = Some(bytes);
        self
    }
}
