//! The parse session.

use std::marker::PhantomData;
use std::rc::Rc;

use vlog_ir::{AllocStats, AstArena, AstList, AstTable, ModuleId, SourceItem};
use vlog_preproc::{PreprocError, PreprocessorContext};
use vlog_tree::{get_all_children, resolve_modules, ResolutionReport, SourceTree};

use crate::{SessionConfig, SyntaxError};

/// All state of one parse: arena, preprocessor context, source tree and the
/// syntax errors reported so far.
///
/// A session is confined to the thread that created it.
#[derive(Debug)]
pub struct ParseSession {
    arena: AstArena,
    preprocessor: PreprocessorContext,
    tree: SourceTree,
    errors: Vec<SyntaxError>,
    /// `Rc` makes the session `!Send` and `!Sync`.
    _single_thread: PhantomData<Rc<()>>,
}

impl ParseSession {
    /// Start a session. Predefined macros from `config` are defined at line 0.
    pub fn new(config: SessionConfig) -> Result<Self, PreprocError> {
        let arena = match config.source_len_hint {
            Some(len) => AstArena::with_capacity(len),
            None => AstArena::new(),
        };
        let mut preprocessor = PreprocessorContext::with_search_dirs(config.search_dirs);
        for (name, value) in &config.predefined_macros {
            preprocessor.define(0, name, value)?;
        }

        tracing::debug!(
            search_dirs = preprocessor.search_dirs().len(),
            macros = preprocessor.macros().len(),
            "parse session started"
        );
        Ok(ParseSession {
            arena,
            preprocessor,
            tree: SourceTree::new(),
            errors: Vec::new(),
            _single_thread: PhantomData,
        })
    }

    /// Error callback for the grammar.
    pub fn report_error(&mut self, line: u32, message: impl Into<String>) {
        let error = SyntaxError {
            line,
            message: message.into(),
        };
        tracing::debug!(line, message = error.message.as_str(), "syntax error");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn preprocessor(&self) -> &PreprocessorContext {
        &self.preprocessor
    }

    pub fn preprocessor_mut(&mut self) -> &mut PreprocessorContext {
        &mut self.preprocessor
    }

    pub fn arena(&self) -> &AstArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut AstArena {
        &mut self.arena
    }

    pub fn tree(&self) -> &SourceTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut SourceTree {
        &mut self.tree
    }

    /// Route completed top-level items into the source tree.
    pub fn add_source(&mut self, items: AstList<SourceItem>) {
        self.tree.add_source(&self.arena, items);
    }

    /// Link every module instantiation to its declaration.
    pub fn resolve(&mut self) -> ResolutionReport {
        resolve_modules(&self.tree, &mut self.arena)
    }

    /// Children of every module, keyed by module name. Call after
    /// [`resolve`](Self::resolve).
    pub fn children(&self) -> AstTable<AstList<ModuleId>> {
        get_all_children(&self.tree, &self.arena)
    }

    /// End the session, releasing every node at once.
    pub fn release(mut self) -> AllocStats {
        let stats = self.arena.release_all();
        tracing::debug!(
            errors = self.errors.len(),
            modules = self.tree.modules().len(),
            "parse session released"
        );
        stats
    }
}

#[cfg(test)]
mod tests;
