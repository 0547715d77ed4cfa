//! Vlog Tree - the source tree of one parse session and the module resolver
//!
//! Completed top-level constructs are routed into a [`SourceTree`]. Once
//! parsing finishes, [`resolve_modules`] links every module instantiation to
//! its declaration and [`get_children`] / [`get_all_children`] build the
//! module dependency graph from the resolved tree.

mod resolver;
mod source_tree;

pub use resolver::{get_all_children, get_children, resolve_modules, ResolutionReport};
pub use source_tree::SourceTree;
