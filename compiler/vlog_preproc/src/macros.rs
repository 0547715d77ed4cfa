//! Text macros: `` `define `` and `` `undef ``.

use crate::context::{MacroDefinition, PreprocessorContext};
use crate::PreprocError;

impl PreprocessorContext {
    /// `` `define name value ``. Redefinition replaces the previous value.
    pub fn define(&mut self, line: u32, name: &str, value: &str) -> Result<(), PreprocError> {
        let definition = MacroDefinition {
            line,
            name: name.to_owned(),
            value: value.to_owned(),
        };
        match self.macros.upsert(name, definition) {
            Ok(Some(previous)) => {
                tracing::debug!(
                    line,
                    name,
                    previous_line = previous.line,
                    "macro redefined"
                );
                Ok(())
            }
            Ok(None) => {
                tracing::trace!(line, name, "define");
                Ok(())
            }
            Err(_) => Err(PreprocError::malformed(line, "`define without a macro name")),
        }
    }

    /// `` `undef name ``. Undefining an unknown macro does nothing.
    pub fn undefine(&mut self, line: u32, name: &str) {
        if self.macros.delete(name).is_ok() {
            tracing::trace!(line, name, "undef");
        } else {
            tracing::trace!(line, name, "undef of unknown macro");
        }
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Current expansion text of `name`.
    pub fn expand(&self, name: &str) -> Option<&str> {
        self.macros.get(name).ok().map(|definition| definition.value.as_str())
    }
}
