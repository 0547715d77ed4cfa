//! Conditional compilation: `` `ifdef ``, `` `ifndef ``, `` `elsif ``,
//! `` `else `` and `` `endif ``.
//!
//! Each open conditional is a [`ConditionalFrame`] on the context's stack.
//! The first selected branch of a conditional wins: once a branch has passed,
//! the frame is marked `wait_for_endif` and every later branch is skipped.
//! A conditional opened inside a skipped region is born waiting, so nothing
//! nested in a false branch is evaluated.

use crate::context::{ConditionalFrame, PreprocessorContext};
use crate::PreprocError;

impl PreprocessorContext {
    /// `` `ifdef name ``
    pub fn ifdef(&mut self, line: u32, name: &str) {
        self.open_conditional(line, name, false);
    }

    /// `` `ifndef name ``
    pub fn ifndef(&mut self, line: u32, name: &str) {
        self.open_conditional(line, name, true);
    }

    fn open_conditional(&mut self, line: u32, name: &str, is_ndef: bool) {
        let defined = self.is_defined(name);
        self.ifdefs.push(ConditionalFrame {
            condition: Some(name.to_owned()),
            line,
            passed: defined != is_ndef,
            is_ndef,
            wait_for_endif: false,
            seen_else: false,
        });

        let enclosing_active = self.ifdefs.peek_second().map_or(true, ConditionalFrame::is_active);
        if !enclosing_active {
            if let Some(frame) = self.ifdefs.peek_mut() {
                frame.passed = false;
                frame.wait_for_endif = true;
            }
        }

        self.refresh_emit();
        tracing::trace!(line, name, is_ndef, emit = self.emit, "open conditional");
    }

    /// `` `elsif name ``
    pub fn elsif(&mut self, line: u32, name: &str) -> Result<(), PreprocError> {
        let defined = self.is_defined(name);
        let frame = self
            .ifdefs
            .peek_mut()
            .ok_or(PreprocError::ElsifWithoutIfdef { line })?;
        if frame.seen_else {
            return Err(PreprocError::ElsifAfterElse { line });
        }

        match (frame.wait_for_endif, frame.passed) {
            // Suppressed conditional, or an earlier branch already won.
            (true, _) => {}
            (false, true) => {
                frame.passed = false;
                frame.wait_for_endif = true;
            }
            (false, false) => {
                frame.condition = Some(name.to_owned());
                frame.is_ndef = false;
                frame.passed = defined;
            }
        }

        self.refresh_emit();
        tracing::trace!(line, name, emit = self.emit, "elsif");
        Ok(())
    }

    /// `` `else ``
    pub fn else_branch(&mut self, line: u32) -> Result<(), PreprocError> {
        let frame = self
            .ifdefs
            .peek_mut()
            .ok_or(PreprocError::ElseWithoutIfdef { line })?;
        if frame.seen_else {
            return Err(PreprocError::DuplicateElse { line });
        }
        frame.seen_else = true;
        frame.condition = None;

        match (frame.wait_for_endif, frame.passed) {
            (true, _) => {}
            (false, true) => {
                frame.passed = false;
                frame.wait_for_endif = true;
            }
            (false, false) => frame.passed = true,
        }

        self.refresh_emit();
        tracing::trace!(line, emit = self.emit, "else");
        Ok(())
    }

    /// `` `endif ``
    pub fn endif(&mut self, line: u32) -> Result<(), PreprocError> {
        let frame = self.ifdefs.pop().ok_or(PreprocError::StrayEndif { line })?;
        self.refresh_emit();
        tracing::trace!(line, opened_at = frame.line, emit = self.emit, "endif");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
