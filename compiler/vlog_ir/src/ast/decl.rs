//! Declaration Types
//!
//! Ports, nets, variables, parameters, genvars, events, functions and tasks.

use crate::containers::AstList;
use crate::{ExprId, IdentId, StmtId};

use super::{Delay, DriveStrength};

/// Packed range `[high:low]` on a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Range {
    pub high: ExprId,
    pub low: ExprId,
}

impl Range {
    pub fn new(high: ExprId, low: ExprId) -> Self {
        Range { high, low }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PortDirection {
    Input,
    Output,
    Inout,
}

/// Net types, also the argument of `` `default_nettype ``.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum NetType {
    #[default]
    Wire,
    Tri,
    Tri0,
    Tri1,
    Wand,
    Triand,
    Wor,
    Trior,
    Trireg,
    Supply0,
    Supply1,
    Uwire,
    /// `` `default_nettype none ``: implicit nets are an error.
    None,
}

impl NetType {
    /// Keyword spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            NetType::Wire => "wire",
            NetType::Tri => "tri",
            NetType::Tri0 => "tri0",
            NetType::Tri1 => "tri1",
            NetType::Wand => "wand",
            NetType::Triand => "triand",
            NetType::Wor => "wor",
            NetType::Trior => "trior",
            NetType::Trireg => "trireg",
            NetType::Supply0 => "supply0",
            NetType::Supply1 => "supply1",
            NetType::Uwire => "uwire",
            NetType::None => "none",
        }
    }

    /// Parse a net type keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let net_type = match keyword {
            "wire" => NetType::Wire,
            "tri" => NetType::Tri,
            "tri0" => NetType::Tri0,
            "tri1" => NetType::Tri1,
            "wand" => NetType::Wand,
            "triand" => NetType::Triand,
            "wor" => NetType::Wor,
            "trior" => NetType::Trior,
            "trireg" => NetType::Trireg,
            "supply0" => NetType::Supply0,
            "supply1" => NetType::Supply1,
            "uwire" => NetType::Uwire,
            "none" => NetType::None,
            _ => return None,
        };
        Some(net_type)
    }
}

/// Port declaration, ANSI header or body style.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PortDecl {
    pub direction: PortDirection,
    pub net_type: Option<NetType>,
    /// `output reg`
    pub is_reg: bool,
    pub signed: bool,
    pub range: Option<Range>,
    pub names: AstList<IdentId>,
    pub line: u32,
}

impl PortDecl {
    pub fn new(direction: PortDirection, names: AstList<IdentId>, line: u32) -> Self {
        PortDecl {
            direction,
            net_type: None,
            is_reg: false,
            signed: false,
            range: None,
            names,
            line,
        }
    }
}

/// One declared name with optional unpacked dimensions and initialiser.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDeclItem {
    pub name: IdentId,
    pub dimensions: Vec<Range>,
    pub init: Option<ExprId>,
}

impl VarDeclItem {
    pub fn new(name: IdentId) -> Self {
        VarDeclItem {
            name,
            dimensions: Vec::new(),
            init: None,
        }
    }
}

/// Net declaration: `wire [7:0] a, b = c;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NetDecl {
    pub net_type: NetType,
    pub signed: bool,
    pub range: Option<Range>,
    pub drive: Option<DriveStrength>,
    pub delay: Option<Delay>,
    pub nets: AstList<VarDeclItem>,
}

/// Register declaration: `reg [7:0] q;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RegDecl {
    pub signed: bool,
    pub range: Option<Range>,
    pub regs: AstList<VarDeclItem>,
}

/// Non-reg variable types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VarType {
    Integer,
    Real,
    Realtime,
    Time,
}

/// `integer`, `real`, `realtime` or `time` declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub ty: VarType,
    pub vars: AstList<VarDeclItem>,
}

/// Parameter type keyword, if any.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParamType {
    #[default]
    Untyped,
    Integer,
    Real,
    Realtime,
    Time,
}

/// `name = value` in a parameter or defparam declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamAssign {
    pub name: IdentId,
    pub value: ExprId,
}

/// `parameter` or `localparam` declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamDecl {
    pub local: bool,
    pub signed: bool,
    pub ty: ParamType,
    pub range: Option<Range>,
    pub assignments: AstList<ParamAssign>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GenvarDecl {
    pub names: AstList<IdentId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EventDecl {
    pub names: AstList<IdentId>,
}

/// Return type of a function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionReturn {
    /// Implicit one-bit or ranged return: `function [7:0] f`.
    Range(Option<Range>),
    /// `function integer f`
    Var(VarType),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub automatic: bool,
    pub signed: bool,
    pub returns: FunctionReturn,
    pub name: IdentId,
    pub ports: Vec<PortDecl>,
    pub decls: Vec<Declaration>,
    pub body: StmtId,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TaskDecl {
    pub automatic: bool,
    pub name: IdentId,
    pub ports: Vec<PortDecl>,
    pub decls: Vec<Declaration>,
    pub body: StmtId,
}

/// Any declaration that can appear in a module, function, task or block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Declaration {
    Port(PortDecl),
    Net(NetDecl),
    Reg(RegDecl),
    Var(VarDecl),
    Param(ParamDecl),
    Genvar(GenvarDecl),
    Event(EventDecl),
    Function(Box<FunctionDecl>),
    Task(Box<TaskDecl>),
    /// `defparam a.b.WIDTH = 8;`
    Defparam(AstList<ParamAssign>),
}

macro_rules! impl_from_decl {
    ($($ty:ty => $variant:ident $(($wrap:path))?;)*) => { $(
        impl From<$ty> for Declaration {
            fn from(decl: $ty) -> Self {
                Declaration::$variant($($wrap)?(decl))
            }
        }
    )* };
}

impl_from_decl! {
    PortDecl => Port;
    NetDecl => Net;
    RegDecl => Reg;
    VarDecl => Var;
    ParamDecl => Param;
    GenvarDecl => Genvar;
    EventDecl => Event;
    FunctionDecl => Function(Box::new);
    TaskDecl => Task(Box::new);
}
