//! AST node factory.
//!
//! Constructors the grammar calls while it reduces productions. They are
//! inherent methods on [`AstArena`](crate::AstArena) so that every node lands
//! in the session arena:
//!
//! - `new_*` methods taking fully built children return either a handle
//!   (pooled kinds) or the node by value (owned kinds)
//! - children are moved in; the caller must not reuse them afterwards
//! - a few constructors return a node with optional fields left at their
//!   defaults (`signed`, `range`, `delay`, `drive`); the grammar fills those
//!   in before handing the node to its parent
//!
//! Constructors also record what an identifier refers to (its
//! [`IdentRole`](crate::IdentRole)) once the production makes it known.
//!
//! # Module Structure
//!
//! - `ident`: identifiers and hierarchical names
//! - `expr`: numbers, expressions, lvalues
//! - `stmt`: statements
//! - `decl`: declarations
//! - `module`: gates, instantiations, generate blocks, module builder
//! - `toplevel`: UDP, config, library and source items

mod decl;
mod expr;
mod ident;
mod module;
mod stmt;
mod toplevel;

pub use module::ModuleDeclBuilder;
