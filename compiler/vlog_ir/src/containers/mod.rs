//! Generic containers used by the AST and the preprocessor.
//!
//! - [`AstList`]: ordered sequence with append, prepend, indexed access and
//!   destructive concatenation
//! - [`AstStack`]: LIFO stack that can also look one level below the top
//! - [`AstTable`]: string-keyed association list with explicit result codes

mod list;
mod stack;
mod table;

pub use list::AstList;
pub use stack::AstStack;
pub use table::{AstTable, TableEntry, TableError, TableResult};
