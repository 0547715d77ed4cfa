//! Vlog Preproc - compiler directive state for the Verilog front-end
//!
//! The scanner recognises directive syntax and calls into a
//! [`PreprocessorContext`]; the context tracks macros, conditional
//! compilation, includes and the simple directives, and tells the scanner
//! through [`PreprocessorContext::emit`] whether tokens currently reach the
//! grammar. No tokens pass through this crate.
//!
//! # Module Structure
//!
//! - `context`: the context, its records, and the simple directive handlers
//! - `conditional`: `` `ifdef `` / `` `ifndef `` / `` `elsif `` / `` `else `` / `` `endif ``
//! - `macros`: `` `define `` / `` `undef `` and expansion lookup
//! - `include`: `` `include `` and the file lookup collaborator
//! - `directive`: directive text parser and dispatcher
//! - `error`: [`PreprocError`]

mod conditional;
mod context;
mod directive;
mod error;
mod include;
mod macros;

pub use context::{
    ConditionalFrame, DefaultNetTypeDirective, IncludeDirective, LineDirective, MacroDefinition,
    PreprocessorContext, Timescale,
};
pub use directive::Directive;
pub use error::PreprocError;
pub use include::{IncludeResolver, SearchDirs};
