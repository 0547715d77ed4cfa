//! `` `include `` handling and file lookup.

use std::path::{Path, PathBuf};

use crate::context::{IncludeDirective, PreprocessorContext};
use crate::PreprocError;

/// Locates an included file.
///
/// The scanner owns file reading; the context only needs to know whether
/// and where the file exists.
pub trait IncludeResolver {
    /// Find `file`, searching `search_dirs` in order.
    fn resolve(&self, file: &str, search_dirs: &[PathBuf]) -> Option<PathBuf>;
}

impl<F> IncludeResolver for F
where
    F: Fn(&str, &[PathBuf]) -> Option<PathBuf>,
{
    fn resolve(&self, file: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
        self(file, search_dirs)
    }
}

/// File system lookup: the name as given (relative to the working
/// directory, or absolute), then `dir/name` for each search directory.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchDirs;

impl IncludeResolver for SearchDirs {
    fn resolve(&self, file: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
        let direct = Path::new(file);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }
        if direct.is_absolute() {
            return None;
        }
        search_dirs
            .iter()
            .map(|dir| dir.join(file))
            .find(|candidate| candidate.is_file())
    }
}

impl PreprocessorContext {
    /// `` `include "file" ``.
    ///
    /// Records the directive and pushes `file` onto the current-file stack,
    /// found or not; the scanner calls [`end_include`](Self::end_include)
    /// when it is done with it. Returns where the file was found.
    pub fn include(
        &mut self,
        line: u32,
        file: &str,
        resolver: &dyn IncludeResolver,
    ) -> Option<PathBuf> {
        let path = resolver.resolve(file, &self.search_dirs);
        if path.is_none() {
            tracing::debug!(line, file, "include file not found");
        } else {
            tracing::trace!(line, file, ?path, "include");
        }

        self.includes.push(IncludeDirective {
            file: file.to_owned(),
            line,
            path: path.clone(),
        });
        self.current_file.push(file.to_owned());
        self.open_includes += 1;
        path
    }

    /// Leave the innermost included file and return its name.
    pub fn end_include(&mut self, line: u32) -> Result<String, PreprocError> {
        if self.open_includes == 0 {
            return Err(PreprocError::IncludeStackEmpty { line });
        }
        let file = self
            .current_file
            .pop()
            .ok_or(PreprocError::IncludeStackEmpty { line })?;
        self.open_includes -= 1;
        tracing::trace!(line, file = file.as_str(), "end include");
        Ok(file)
    }
}

#[cfg(test)]
mod tests;
