//! AST node types.
//!
//! Recursive kinds (expressions, statements, identifiers) and top-level
//! declarations live in [`AstArena`](crate::AstArena) pools and are referenced
//! by handle. All other nodes are owned by value by their parent, so the tree
//! is a strict tree: no node has two parents. The one chained structure is a
//! hierarchical identifier, whose segments link through `Identifier::next`.
//!
//! # Module Structure
//!
//! - `ident`: identifiers, qualifiers and resolution roles
//! - `operators`: unary and binary operators
//! - `expr`: numbers, expressions, concatenations, lvalues
//! - `stmt`: statements, timing control, delays
//! - `decl`: port, net, variable, parameter, function and task declarations
//! - `gate`: gate, switch and UDP instantiations
//! - `module`: module items, module instantiations, module declarations
//! - `udp`: user-defined primitive declarations
//! - `config`: library and config declarations
//! - `source`: top-level source items

mod config;
mod decl;
mod expr;
mod gate;
mod ident;
mod module;
mod operators;
mod source;
mod stmt;
mod udp;

pub use config::{ConfigDecl, ConfigRule, LibCell, LibraryDecl, LibraryKind, RuleClause};
pub use decl::{
    Declaration, EventDecl, FunctionDecl, FunctionReturn, GenvarDecl, NetDecl, NetType,
    ParamAssign, ParamDecl, ParamType, PortDecl, PortDirection, Range, RegDecl, TaskDecl,
    VarDecl, VarDeclItem, VarType,
};
pub use expr::{Concatenation, Expr, ExprKind, FunctionCall, LValue, Number, NumberBase};
pub use gate::{
    DriveStrength, GateInstance, GateInstantiation, GateKind, GateType, PrimitiveStrength,
    PullDirection, SwitchType, UdpInstance, UdpInstantiation,
};
pub use ident::{IdentKind, IdentQualifier, IdentRole, Identifier};
pub use module::{
    ContinuousAssign, GenerateBlock, GenerateKind, ModuleDecl, ModuleInstance,
    ModuleInstantiation, ModuleItem, ModuleItemKind, NetAssignment, ParamOverride,
    PortConnections, Resolution,
};
pub use operators::Operator;
pub use source::SourceItem;
pub use stmt::{
    BlockKind, CaseItem, CaseKind, CaseStmt, CondBranch, Delay, Edge, EventControl, EventExpr,
    IfElse, LoopKind, ProcAssignKind, Stmt, StmtBlock, StmtKind, TimingControl,
};
pub use udp::{UdpBody, UdpDecl, UdpOutput, UdpTableEntry};
