//! Statement constructors.

use crate::ast::{
    BlockKind, CaseItem, CaseKind, CaseStmt, Declaration, IdentRole, IfElse, LValue, LoopKind,
    ProcAssignKind, Stmt, StmtBlock, StmtKind, TimingControl,
};
use crate::containers::AstList;
use crate::{AstArena, ExprId, IdentId, StmtId};

impl AstArena {
    fn new_statement(&mut self, kind: StmtKind, line: u32) -> StmtId {
        self.alloc_stmt(Stmt::new(kind, line))
    }

    /// `lhs = [control] rhs;`
    pub fn new_blocking_assignment(
        &mut self,
        lhs: LValue,
        rhs: ExprId,
        control: Option<TimingControl>,
        line: u32,
    ) -> StmtId {
        self.new_statement(StmtKind::Blocking { lhs, rhs, control }, line)
    }

    /// `lhs <= [control] rhs;`
    pub fn new_nonblocking_assignment(
        &mut self,
        lhs: LValue,
        rhs: ExprId,
        control: Option<TimingControl>,
        line: u32,
    ) -> StmtId {
        self.new_statement(StmtKind::NonBlocking { lhs, rhs, control }, line)
    }

    /// `assign`/`force` take a value; `deassign`/`release` ignore `rhs`.
    pub fn new_procedural_continuous_assignment(
        &mut self,
        kind: ProcAssignKind,
        lhs: LValue,
        rhs: Option<ExprId>,
        line: u32,
    ) -> StmtId {
        let rhs = match kind {
            ProcAssignKind::Assign | ProcAssignKind::Force => rhs,
            ProcAssignKind::Deassign | ProcAssignKind::Release => None,
        };
        self.new_statement(StmtKind::ProceduralContinuous { kind, lhs, rhs }, line)
    }

    /// `begin [: name] decls stmts end` or `fork ... join`.
    pub fn new_statement_block(
        &mut self,
        kind: BlockKind,
        name: Option<IdentId>,
        decls: Vec<Declaration>,
        stmts: AstList<StmtId>,
        line: u32,
    ) -> StmtId {
        if let Some(name) = name {
            self.set_identifier_role(name, IdentRole::Block);
        }
        self.new_statement(
            StmtKind::Block(StmtBlock {
                kind,
                name,
                decls,
                stmts,
            }),
            line,
        )
    }

    pub fn new_if_statement(&mut self, if_else: IfElse, line: u32) -> StmtId {
        self.new_statement(StmtKind::If(if_else), line)
    }

    pub fn new_case_statement(
        &mut self,
        kind: CaseKind,
        expr: ExprId,
        items: AstList<CaseItem>,
        line: u32,
    ) -> StmtId {
        self.new_statement(StmtKind::Case(CaseStmt { kind, expr, items }), line)
    }

    pub fn new_forever_loop(&mut self, body: StmtId, line: u32) -> StmtId {
        self.new_statement(
            StmtKind::Loop {
                kind: LoopKind::Forever,
                body,
            },
            line,
        )
    }

    pub fn new_repeat_loop(&mut self, count: ExprId, body: StmtId, line: u32) -> StmtId {
        self.new_statement(
            StmtKind::Loop {
                kind: LoopKind::Repeat(count),
                body,
            },
            line,
        )
    }

    pub fn new_while_loop(&mut self, condition: ExprId, body: StmtId, line: u32) -> StmtId {
        self.new_statement(
            StmtKind::Loop {
                kind: LoopKind::While(condition),
                body,
            },
            line,
        )
    }

    /// `for (init; condition; step) body`; `init` and `step` are assignments.
    pub fn new_for_loop(
        &mut self,
        init: StmtId,
        condition: ExprId,
        step: StmtId,
        body: StmtId,
        line: u32,
    ) -> StmtId {
        self.new_statement(
            StmtKind::Loop {
                kind: LoopKind::For {
                    init,
                    condition,
                    step,
                },
                body,
            },
            line,
        )
    }

    /// `#delay stmt` or `@(event) stmt`. `None` is the null statement.
    pub fn new_timed_statement(
        &mut self,
        control: TimingControl,
        stmt: Option<StmtId>,
        line: u32,
    ) -> StmtId {
        self.new_statement(StmtKind::Timed { control, stmt }, line)
    }

    pub fn new_wait_statement(
        &mut self,
        condition: ExprId,
        stmt: Option<StmtId>,
        line: u32,
    ) -> StmtId {
        self.new_statement(StmtKind::Wait { condition, stmt }, line)
    }

    /// `-> event;`
    pub fn new_event_trigger(&mut self, event: IdentId, line: u32) -> StmtId {
        self.set_identifier_role(event, IdentRole::Event);
        self.new_statement(StmtKind::EventTrigger(event), line)
    }

    /// `disable name;` where `name` is a task or named block.
    pub fn new_disable_statement(&mut self, target: IdentId, line: u32) -> StmtId {
        self.new_statement(StmtKind::Disable(target), line)
    }

    /// `name(args);` for a user task.
    pub fn new_task_enable(&mut self, name: IdentId, args: AstList<ExprId>, line: u32) -> StmtId {
        let system = self.get_ident(name).is_system();
        if !system {
            self.set_identifier_role(name, IdentRole::Task);
        }
        self.new_statement(StmtKind::TaskEnable { name, args, system }, line)
    }

    /// `$name(args);`
    pub fn new_system_task_enable(
        &mut self,
        name: &str,
        args: AstList<ExprId>,
        line: u32,
    ) -> StmtId {
        let name = self.new_system_identifier(name, line);
        self.new_statement(
            StmtKind::TaskEnable {
                name,
                args,
                system: true,
            },
            line,
        )
    }

    /// `;`
    pub fn new_null_statement(&mut self, line: u32) -> StmtId {
        self.new_statement(StmtKind::Null, line)
    }
}
