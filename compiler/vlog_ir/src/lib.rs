//! Vlog IR - arena, containers and AST for the Verilog front-end
//!
//! This crate contains the data structures every other stage builds on:
//! - Typed handles (`ExprId`, `StmtId`, `IdentId`, ...) into the session arena
//! - The session arena, which owns every node and tracks every allocation
//! - Generic containers: append-only list, LIFO stack, association table
//! - String interning (`Name`)
//! - AST node types and the node factory (constructors on [`AstArena`])
//! - Formatting helpers that turn finished nodes back into text
//!
//! # Design Philosophy
//!
//! - **Flatten the recursive kinds**: expressions, statements, identifiers and
//!   top-level declarations live in arena pools and are referenced by `u32`
//!   handles. Everything else is owned by value by the node that contains it.
//! - **Intern strings**: identifier text, number digits and string literals are
//!   stored once in the arena's interner and referenced by `Name`.
//! - **Bulk release**: nodes are never freed one at a time. The arena is
//!   released as a whole with [`AstArena::release_all`].

mod arena;
pub mod ast;
pub mod containers;
mod display;
mod factory;
mod ids;
mod interner;
mod name;

pub use arena::{AllocRecord, AllocStats, AstArena, Slot};
pub use ast::{
    BlockKind, CaseItem, CaseKind, CaseStmt, CondBranch, ConfigDecl, ConfigRule,
    Concatenation, ContinuousAssign, Declaration, Delay, DriveStrength, Edge, EventControl,
    EventDecl, EventExpr, Expr, ExprKind, FunctionCall, FunctionDecl, FunctionReturn, GateInstance,
    GateInstantiation, GateKind, GateType, GenerateBlock, GenerateKind, GenvarDecl, IdentKind,
    IdentQualifier, IdentRole, Identifier, IfElse, LValue, LibCell, LibraryDecl, LibraryKind,
    LoopKind, ModuleDecl, ModuleInstance, ModuleInstantiation, ModuleItem, ModuleItemKind,
    NetAssignment, NetDecl, NetType, Number, NumberBase, Operator, ParamAssign, ParamDecl,
    ParamOverride, ParamType, PortConnections, PortDecl, PortDirection, PrimitiveStrength,
    ProcAssignKind, PullDirection, Range, RegDecl, Resolution, RuleClause, SourceItem, Stmt,
    StmtBlock, StmtKind, SwitchType, TaskDecl, TimingControl, UdpBody, UdpDecl, UdpInstance,
    UdpInstantiation, UdpOutput, UdpTableEntry, VarDecl, VarDeclItem, VarType,
};
pub use containers::{AstList, AstStack, AstTable, TableEntry, TableError, TableResult};
pub use display::{
    expression_to_string, identifier_to_string, number_to_string, operator_to_string,
};
pub use factory::ModuleDeclBuilder;
pub use ids::{BlockId, ConfigId, ExprId, IdentId, LibraryId, ModuleId, StmtId, UdpId};
pub use interner::StringInterner;
pub use name::Name;
