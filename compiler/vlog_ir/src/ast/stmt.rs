//! Statement Types
//!
//! Procedural statements plus the timing controls and delays they carry.

use smallvec::SmallVec;

use crate::containers::AstList;
use crate::{ExprId, IdentId, StmtId};

use super::{Declaration, LValue};

/// Delay value list `#d`, `#(rise, fall)` or `#(rise, fall, turnoff)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Delay {
    pub values: SmallVec<[ExprId; 3]>,
}

impl Delay {
    /// Single delay value.
    pub fn single(value: ExprId) -> Self {
        let mut values = SmallVec::new();
        values.push(value);
        Delay { values }
    }

    /// Delay with one to three values.
    ///
    /// Returns `None` for an empty list or more than three values.
    pub fn from_values(values: &[ExprId]) -> Option<Self> {
        if values.is_empty() || values.len() > 3 {
            return None;
        }
        Some(Delay {
            values: SmallVec::from_slice(values),
        })
    }
}

/// Edge qualifier of an event expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Edge {
    #[default]
    Any,
    Posedge,
    Negedge,
}

/// One term of an event list, e.g. `posedge clk`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EventExpr {
    pub edge: Edge,
    pub expr: ExprId,
}

/// Event control `@...`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum EventControl {
    /// `@*` or `@(*)`
    Star,
    /// `@name`
    Ident(IdentId),
    /// `@(a or posedge b, c)`
    Events(AstList<EventExpr>),
}

/// Delay or event control prefix on a statement or assignment.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TimingControl {
    Delay(Delay),
    Event(EventControl),
    /// `repeat (count) @(...)` intra-assignment control.
    RepeatEvent { count: ExprId, event: EventControl },
}

/// Sequential `begin`/`end` or parallel `fork`/`join` block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockKind {
    Sequential,
    Parallel,
}

/// Statement block with optional name and local declarations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StmtBlock {
    pub kind: BlockKind,
    pub name: Option<IdentId>,
    pub decls: Vec<Declaration>,
    pub stmts: AstList<StmtId>,
}

/// One `if (condition) stmt` branch. A missing statement is the null statement `;`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CondBranch {
    pub condition: ExprId,
    pub stmt: Option<StmtId>,
}

/// `if` / `else if` / `else` chain.
///
/// Built in two phases: [`IfElse::new`] creates the first branch, and the
/// grammar adds `else if` branches and the final `else` as it reads them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfElse {
    pub branches: AstList<CondBranch>,
    pub else_stmt: Option<StmtId>,
}

impl IfElse {
    pub fn new(condition: ExprId, stmt: Option<StmtId>) -> Self {
        let mut branches = AstList::new();
        branches.push(CondBranch { condition, stmt });
        IfElse {
            branches,
            else_stmt: None,
        }
    }

    /// Append an `else if` branch.
    #[must_use]
    pub fn else_if(mut self, condition: ExprId, stmt: Option<StmtId>) -> Self {
        self.branches.push(CondBranch { condition, stmt });
        self
    }

    /// Set the final `else` statement.
    #[must_use]
    pub fn otherwise(mut self, stmt: StmtId) -> Self {
        self.else_stmt = Some(stmt);
        self
    }
}

/// `case`, `casex` or `casez`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CaseKind {
    Case,
    Casex,
    Casez,
}

/// One case item. An empty condition list marks the `default` item.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CaseItem {
    pub conditions: AstList<ExprId>,
    pub stmt: Option<StmtId>,
}

impl CaseItem {
    pub fn new(conditions: AstList<ExprId>, stmt: Option<StmtId>) -> Self {
        CaseItem { conditions, stmt }
    }

    /// The `default:` item.
    pub fn default_item(stmt: Option<StmtId>) -> Self {
        CaseItem {
            conditions: AstList::new(),
            stmt,
        }
    }

    pub fn is_default(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CaseStmt {
    pub kind: CaseKind,
    pub expr: ExprId,
    pub items: AstList<CaseItem>,
}

impl CaseStmt {
    /// The `default` item, if present.
    pub fn default_item(&self) -> Option<&CaseItem> {
        self.items.iter().find(|item| item.is_default())
    }
}

/// Loop statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LoopKind {
    Forever,
    Repeat(ExprId),
    While(ExprId),
    /// `for (init; condition; step)`; `init` and `step` are blocking assignments.
    For {
        init: StmtId,
        condition: ExprId,
        step: StmtId,
    },
}

/// Procedural continuous assignment kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProcAssignKind {
    Assign,
    Deassign,
    Force,
    Release,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `lhs = [control] rhs`
    Blocking {
        lhs: LValue,
        rhs: ExprId,
        control: Option<TimingControl>,
    },
    /// `lhs <= [control] rhs`
    NonBlocking {
        lhs: LValue,
        rhs: ExprId,
        control: Option<TimingControl>,
    },
    /// `assign`/`force` carry a value; `deassign`/`release` do not.
    ProceduralContinuous {
        kind: ProcAssignKind,
        lhs: LValue,
        rhs: Option<ExprId>,
    },
    Block(StmtBlock),
    If(IfElse),
    Case(CaseStmt),
    Loop {
        kind: LoopKind,
        body: StmtId,
    },
    /// Statement prefixed by a delay or event control.
    Timed {
        control: TimingControl,
        stmt: Option<StmtId>,
    },
    Wait {
        condition: ExprId,
        stmt: Option<StmtId>,
    },
    /// `-> event`
    EventTrigger(IdentId),
    Disable(IdentId),
    /// Task enable, user (`name(args)`) or system (`$name(args)`).
    TaskEnable {
        name: IdentId,
        args: AstList<ExprId>,
        system: bool,
    },
    /// `;`
    Null,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}
