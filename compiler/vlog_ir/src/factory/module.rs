//! Module-level constructors: gates, instantiations, generate blocks and the
//! two-phase module declaration builder.

use crate::ast::{
    ContinuousAssign, Declaration, GateInstance, GateInstantiation, GateKind, GenerateBlock,
    GenerateKind, IdentRole, LValue, ModuleDecl, ModuleInstance, ModuleInstantiation,
    ModuleItem, NetAssignment, NetType, ParamOverride, PortConnections, PortDecl, Range,
    Resolution, UdpInstance, UdpInstantiation,
};
use crate::containers::AstList;
use crate::{AstArena, ExprId, IdentId, ModuleId};

impl AstArena {
    // ===== Gates and primitives =====

    /// Gate, switch or pull instantiation. Drive strength and delay start
    /// unset.
    pub fn new_gate_instantiation(
        &mut self,
        kind: GateKind,
        instances: AstList<GateInstance>,
        line: u32,
    ) -> GateInstantiation {
        for name in instances.iter().filter_map(|inst| inst.name) {
            self.set_identifier_role(name, IdentRole::Instance);
        }
        GateInstantiation {
            kind,
            drive: None,
            delay: None,
            instances,
            line,
        }
    }

    pub fn new_udp_instance(
        &mut self,
        name: Option<IdentId>,
        range: Option<Range>,
        output: LValue,
        inputs: Vec<ExprId>,
    ) -> UdpInstance {
        if let Some(name) = name {
            self.set_identifier_role(name, IdentRole::Instance);
        }
        UdpInstance {
            name,
            range,
            output,
            inputs,
        }
    }

    pub fn new_udp_instantiation(
        &mut self,
        udp_name: IdentId,
        instances: AstList<UdpInstance>,
        line: u32,
    ) -> UdpInstantiation {
        self.set_identifier_role(udp_name, IdentRole::Udp);
        UdpInstantiation {
            udp_name,
            drive: None,
            delay: None,
            instances,
            line,
        }
    }

    // ===== Module instantiation =====

    pub fn new_module_instance(
        &mut self,
        name: IdentId,
        range: Option<Range>,
        ports: PortConnections,
    ) -> ModuleInstance {
        self.set_identifier_role(name, IdentRole::Instance);
        ModuleInstance { name, range, ports }
    }

    /// Ordered (`name` is `None`) or named parameter override.
    pub fn new_param_override(
        &mut self,
        name: Option<IdentId>,
        value: Option<ExprId>,
    ) -> ParamOverride {
        if let Some(name) = name {
            self.set_identifier_role(name, IdentRole::Parameter);
        }
        ParamOverride { name, value }
    }

    /// Instantiation of `module_name`, left unresolved until the resolver
    /// runs over the finished tree.
    pub fn new_module_instantiation(
        &mut self,
        module_name: IdentId,
        params: AstList<ParamOverride>,
        instances: AstList<ModuleInstance>,
        line: u32,
    ) -> ModuleInstantiation {
        self.set_identifier_role(module_name, IdentRole::Module);
        ModuleInstantiation {
            module_name,
            params,
            instances,
            resolution: Resolution::Unresolved,
            line,
        }
    }

    // ===== Other module items =====

    /// `assign a = b, c = d;`. Drive strength and delay start unset.
    pub fn new_continuous_assign(
        &mut self,
        assignments: AstList<NetAssignment>,
    ) -> ContinuousAssign {
        ContinuousAssign {
            drive: None,
            delay: None,
            assignments,
        }
    }

    pub fn new_generate_block(
        &mut self,
        kind: GenerateKind,
        name: Option<IdentId>,
        items: AstList<ModuleItem>,
    ) -> GenerateBlock {
        if let Some(name) = name {
            self.set_identifier_role(name, IdentRole::Block);
        }
        if let GenerateKind::Loop { var, .. } = &kind {
            self.set_identifier_role(*var, IdentRole::Genvar);
        }
        let mut block = GenerateBlock::new(kind, items);
        block.name = name;
        block
    }

    // ===== Module declaration =====

    /// Start a module declaration. Items are added as the grammar reads the
    /// body; [`ModuleDeclBuilder::finish`] stores the module.
    pub fn new_module_declaration(&mut self, name: IdentId, line: u32) -> ModuleDeclBuilder {
        self.set_identifier_role(name, IdentRole::Module);
        ModuleDeclBuilder {
            decl: ModuleDecl {
                name,
                params: AstList::new(),
                ports: AstList::new(),
                port_names: AstList::new(),
                items: AstList::new(),
                cell_define: false,
                default_net_type: NetType::Wire,
                line,
            },
        }
    }
}

/// Module declaration under construction.
///
/// The header (parameters, ports) and body arrive in several grammar
/// reductions. Nothing is stored in the arena until [`finish`](Self::finish).
#[derive(Clone, Debug)]
#[must_use = "a module declaration is only stored by `finish`"]
pub struct ModuleDeclBuilder {
    decl: ModuleDecl,
}

impl ModuleDeclBuilder {
    /// `#(parameter ...)` header declarations.
    pub fn params(mut self, params: AstList<Declaration>) -> Self {
        self.decl.params = params;
        self
    }

    /// ANSI port declarations.
    pub fn ports(mut self, ports: AstList<PortDecl>) -> Self {
        self.decl.ports = ports;
        self
    }

    /// Non-ANSI port name list.
    pub fn port_names(mut self, names: AstList<IdentId>) -> Self {
        self.decl.port_names = names;
        self
    }

    pub fn item(mut self, item: ModuleItem) -> Self {
        self.decl.items.push(item);
        self
    }

    pub fn items(mut self, items: AstList<ModuleItem>) -> Self {
        self.decl.items.concat(items);
        self
    }

    pub fn cell_define(mut self, cell_define: bool) -> Self {
        self.decl.cell_define = cell_define;
        self
    }

    pub fn default_net_type(mut self, net_type: NetType) -> Self {
        self.decl.default_net_type = net_type;
        self
    }

    /// Store the module in the arena.
    pub fn finish(self, arena: &mut AstArena) -> ModuleId {
        tracing::trace!(
            items = self.decl.items.len(),
            line = self.decl.line,
            "module declaration finished"
        );
        arena.alloc_module(self.decl)
    }
}
