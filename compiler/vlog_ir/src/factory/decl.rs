//! Declaration constructors.
//!
//! These return the declaration by value with `signed`, `range` and similar
//! header fields at their defaults; the grammar sets them and wraps the
//! result with `Declaration::from`.

use crate::ast::{
    EventDecl, FunctionDecl, FunctionReturn, GenvarDecl, IdentRole, NetDecl, NetType,
    ParamAssign, ParamDecl, ParamType, PortDecl, PortDirection, RegDecl, TaskDecl, VarDecl,
    VarDeclItem, VarType,
};
use crate::ast::Declaration;
use crate::containers::AstList;
use crate::{AstArena, IdentId, StmtId};

impl AstArena {
    fn set_roles<'a>(&mut self, names: impl IntoIterator<Item = &'a IdentId>, role: IdentRole) {
        for &name in names {
            self.set_identifier_role(name, role);
        }
    }

    pub fn new_port_declaration(
        &mut self,
        direction: PortDirection,
        names: AstList<IdentId>,
        line: u32,
    ) -> PortDecl {
        self.set_roles(&names, IdentRole::Port);
        PortDecl::new(direction, names, line)
    }

    pub fn new_net_declaration(&mut self, net_type: NetType, nets: AstList<VarDeclItem>) -> NetDecl {
        self.set_roles(nets.iter().map(|item| &item.name), IdentRole::Net);
        NetDecl {
            net_type,
            signed: false,
            range: None,
            drive: None,
            delay: None,
            nets,
        }
    }

    pub fn new_reg_declaration(&mut self, regs: AstList<VarDeclItem>) -> RegDecl {
        self.set_roles(regs.iter().map(|item| &item.name), IdentRole::Reg);
        RegDecl {
            signed: false,
            range: None,
            regs,
        }
    }

    pub fn new_var_declaration(&mut self, ty: VarType, vars: AstList<VarDeclItem>) -> VarDecl {
        self.set_roles(vars.iter().map(|item| &item.name), IdentRole::Variable);
        VarDecl { ty, vars }
    }

    /// `parameter` (or `localparam` when `local`).
    pub fn new_param_declaration(
        &mut self,
        local: bool,
        assignments: AstList<ParamAssign>,
    ) -> ParamDecl {
        self.set_roles(assignments.iter().map(|a| &a.name), IdentRole::Parameter);
        ParamDecl {
            local,
            signed: false,
            ty: ParamType::Untyped,
            range: None,
            assignments,
        }
    }

    pub fn new_genvar_declaration(&mut self, names: AstList<IdentId>) -> GenvarDecl {
        self.set_roles(&names, IdentRole::Genvar);
        GenvarDecl { names }
    }

    pub fn new_event_declaration(&mut self, names: AstList<IdentId>) -> EventDecl {
        self.set_roles(&names, IdentRole::Event);
        EventDecl { names }
    }

    pub fn new_function_declaration(
        &mut self,
        returns: FunctionReturn,
        name: IdentId,
        ports: Vec<PortDecl>,
        decls: Vec<Declaration>,
        body: StmtId,
    ) -> FunctionDecl {
        self.set_identifier_role(name, IdentRole::Function);
        FunctionDecl {
            automatic: false,
            signed: false,
            returns,
            name,
            ports,
            decls,
            body,
        }
    }

    pub fn new_task_declaration(
        &mut self,
        name: IdentId,
        ports: Vec<PortDecl>,
        decls: Vec<Declaration>,
        body: StmtId,
    ) -> TaskDecl {
        self.set_identifier_role(name, IdentRole::Task);
        TaskDecl {
            automatic: false,
            name,
            ports,
            decls,
            body,
        }
    }

    /// `defparam path = value, ...;`. Targets are hierarchical, so their
    /// roles stay unknown.
    pub fn new_defparam_declaration(&mut self, assignments: AstList<ParamAssign>) -> Declaration {
        Declaration::Defparam(assignments)
    }
}
