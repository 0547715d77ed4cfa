//! Module Items and Declarations
//!
//! Module instantiation, continuous assignment, generate constructs and the
//! module declaration that owns them.

use crate::containers::AstList;
use crate::{ExprId, IdentId, ModuleId, StmtId, UdpId};

use super::{
    Declaration, Delay, DriveStrength, GateInstantiation, LValue, NetType, PortDecl, Range,
    UdpInstantiation,
};

/// One parameter value in `#(...)`, ordered (`name` is `None`) or named.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamOverride {
    pub name: Option<IdentId>,
    /// `None` for an explicitly empty named override `.N()`.
    pub value: Option<ExprId>,
}

/// Port connections of a module instance.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PortConnections {
    /// `(a, , c)`: `None` marks an unconnected position.
    Ordered(Vec<Option<ExprId>>),
    /// `(.a(x), .b())`
    Named(Vec<(IdentId, Option<ExprId>)>),
}

impl Default for PortConnections {
    fn default() -> Self {
        PortConnections::Ordered(Vec::new())
    }
}

/// `name [range] (connections)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleInstance {
    pub name: IdentId,
    pub range: Option<Range>,
    pub ports: PortConnections,
}

/// What a module instantiation's type name refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Resolution {
    /// Not found in the source tree (black box), or resolution has not run.
    #[default]
    Unresolved,
    Module(ModuleId),
    /// The grammar cannot tell a UDP instance from a module instance; the
    /// resolver may find the name among the primitives instead.
    Udp(UdpId),
}

impl Resolution {
    pub fn module(self) -> Option<ModuleId> {
        match self {
            Resolution::Module(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

/// `type_name #(params) inst1 (...), inst2 (...);`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleInstantiation {
    pub module_name: IdentId,
    pub params: AstList<ParamOverride>,
    pub instances: AstList<ModuleInstance>,
    pub resolution: Resolution,
    pub line: u32,
}

/// `lhs = rhs` inside a continuous assignment.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NetAssignment {
    pub lhs: LValue,
    pub rhs: ExprId,
}

/// `assign (strong0, weak1) #2 a = b, c = d;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContinuousAssign {
    pub drive: Option<DriveStrength>,
    pub delay: Option<Delay>,
    pub assignments: AstList<NetAssignment>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum GenerateKind {
    /// `generate ... endgenerate`
    Region,
    /// `begin [: name] ... end` inside a generate construct.
    Block,
    /// `if (condition) ... [else ...]`; `case` lowers to a chain of these.
    Conditional { condition: ExprId },
    /// `for (var = init; condition; var = step)`
    Loop {
        var: IdentId,
        init: ExprId,
        condition: ExprId,
        step: ExprId,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GenerateBlock {
    pub kind: GenerateKind,
    pub name: Option<IdentId>,
    pub items: AstList<ModuleItem>,
    /// Items of the `else` arm of a conditional generate.
    pub else_items: AstList<ModuleItem>,
}

impl GenerateBlock {
    pub fn new(kind: GenerateKind, items: AstList<ModuleItem>) -> Self {
        GenerateBlock {
            kind,
            name: None,
            items,
            else_items: AstList::new(),
        }
    }

    /// Every item, both arms included.
    pub fn all_items(&self) -> impl Iterator<Item = &ModuleItem> {
        self.items.iter().chain(self.else_items.iter())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModuleItemKind {
    Declaration(Declaration),
    ContinuousAssign(ContinuousAssign),
    Gate(GateInstantiation),
    Udp(UdpInstantiation),
    Module(ModuleInstantiation),
    Initial(StmtId),
    Always(StmtId),
    Generate(Box<GenerateBlock>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleItem {
    pub kind: ModuleItemKind,
    pub line: u32,
}

impl ModuleItem {
    pub fn new(kind: ModuleItemKind, line: u32) -> Self {
        ModuleItem { kind, line }
    }
}

/// Completed module declaration.
///
/// Built through [`ModuleDeclBuilder`](crate::ModuleDeclBuilder) and stored
/// in the arena's module pool.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleDecl {
    pub name: IdentId,
    pub params: AstList<Declaration>,
    /// ANSI-style port declarations from the header.
    pub ports: AstList<PortDecl>,
    /// Non-ANSI port list `module m (a, b, c);`.
    pub port_names: AstList<IdentId>,
    pub items: AstList<ModuleItem>,
    /// Declared between `` `celldefine `` and `` `endcelldefine ``.
    pub cell_define: bool,
    /// `` `default_nettype `` in effect at the declaration.
    pub default_net_type: NetType,
    pub line: u32,
}

impl ModuleDecl {
    /// Every module instantiation in the body, generate constructs included,
    /// in source order.
    pub fn module_instantiations(&self) -> Vec<&ModuleInstantiation> {
        let mut found = Vec::new();
        collect_instantiations(&self.items, &mut found);
        found
    }

    /// Visit every module instantiation mutably, generate constructs included.
    pub fn for_each_instantiation_mut(&mut self, mut f: impl FnMut(&mut ModuleInstantiation)) {
        visit_instantiations_mut(&mut self.items, &mut f);
    }
}

fn collect_instantiations<'a>(
    items: &'a AstList<ModuleItem>,
    found: &mut Vec<&'a ModuleInstantiation>,
) {
    for item in items {
        match &item.kind {
            ModuleItemKind::Module(inst) => found.push(inst),
            ModuleItemKind::Generate(block) => {
                collect_instantiations(&block.items, found);
                collect_instantiations(&block.else_items, found);
            }
            _ => {}
        }
    }
}

fn visit_instantiations_mut(
    items: &mut AstList<ModuleItem>,
    f: &mut impl FnMut(&mut ModuleInstantiation),
) {
    for item in items.iter_mut() {
        match &mut item.kind {
            ModuleItemKind::Module(inst) => f(inst),
            ModuleItemKind::Generate(block) => {
                visit_instantiations_mut(&mut block.items, f);
                visit_instantiations_mut(&mut block.else_items, f);
            }
            _ => {}
        }
    }
}
