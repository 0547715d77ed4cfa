//! Gate, Switch and UDP Instantiations
//!
//! Built-in gate and switch primitives, pull gates, and instances of
//! user-defined primitives.

use crate::containers::AstList;
use crate::{ExprId, IdentId};

use super::{Delay, LValue, Range};

/// N-input, N-output and enable gates.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GateType {
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Xnor,
    Buf,
    Not,
    Bufif0,
    Bufif1,
    Notif0,
    Notif1,
}

impl GateType {
    pub fn as_str(self) -> &'static str {
        match self {
            GateType::And => "and",
            GateType::Nand => "nand",
            GateType::Or => "or",
            GateType::Nor => "nor",
            GateType::Xor => "xor",
            GateType::Xnor => "xnor",
            GateType::Buf => "buf",
            GateType::Not => "not",
            GateType::Bufif0 => "bufif0",
            GateType::Bufif1 => "bufif1",
            GateType::Notif0 => "notif0",
            GateType::Notif1 => "notif1",
        }
    }
}

/// MOS, CMOS and pass switches.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SwitchType {
    Nmos,
    Pmos,
    Rnmos,
    Rpmos,
    Cmos,
    Rcmos,
    Tran,
    Rtran,
    Tranif0,
    Tranif1,
    Rtranif0,
    Rtranif1,
}

impl SwitchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SwitchType::Nmos => "nmos",
            SwitchType::Pmos => "pmos",
            SwitchType::Rnmos => "rnmos",
            SwitchType::Rpmos => "rpmos",
            SwitchType::Cmos => "cmos",
            SwitchType::Rcmos => "rcmos",
            SwitchType::Tran => "tran",
            SwitchType::Rtran => "rtran",
            SwitchType::Tranif0 => "tranif0",
            SwitchType::Tranif1 => "tranif1",
            SwitchType::Rtranif0 => "rtranif0",
            SwitchType::Rtranif1 => "rtranif1",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PullDirection {
    Pullup,
    Pulldown,
}

/// Which primitive a gate instantiation uses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GateKind {
    Gate(GateType),
    Switch(SwitchType),
    Pull(PullDirection),
}

/// Drive or charge strength keyword.
///
/// `None` is also the initial "no unconnected drive" setting of the
/// preprocessor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PrimitiveStrength {
    Supply0,
    Supply1,
    Strong0,
    Strong1,
    Pull0,
    Pull1,
    Weak0,
    Weak1,
    HighZ0,
    HighZ1,
    #[default]
    None,
}

impl PrimitiveStrength {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let strength = match keyword {
            "supply0" => PrimitiveStrength::Supply0,
            "supply1" => PrimitiveStrength::Supply1,
            "strong0" => PrimitiveStrength::Strong0,
            "strong1" => PrimitiveStrength::Strong1,
            "pull0" => PrimitiveStrength::Pull0,
            "pull1" => PrimitiveStrength::Pull1,
            "weak0" => PrimitiveStrength::Weak0,
            "weak1" => PrimitiveStrength::Weak1,
            "highz0" => PrimitiveStrength::HighZ0,
            "highz1" => PrimitiveStrength::HighZ1,
            _ => return None,
        };
        Some(strength)
    }
}

/// `(strength0, strength1)` drive strength pair.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DriveStrength {
    pub strength0: PrimitiveStrength,
    pub strength1: PrimitiveStrength,
}

impl DriveStrength {
    pub fn new(strength0: PrimitiveStrength, strength1: PrimitiveStrength) -> Self {
        DriveStrength {
            strength0,
            strength1,
        }
    }
}

/// One terminal list of a gate instantiation.
///
/// Terminals are split by role: driven outputs, data inputs, and control
/// inputs (enable, gate or p/n control). Which groups are populated depends
/// on the primitive; the constructors enforce the legal shapes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GateInstance {
    pub name: Option<IdentId>,
    pub range: Option<Range>,
    pub outputs: Vec<LValue>,
    pub inputs: Vec<ExprId>,
    pub controls: Vec<ExprId>,
}

impl GateInstance {
    fn with_terminals(outputs: Vec<LValue>, inputs: Vec<ExprId>, controls: Vec<ExprId>) -> Self {
        GateInstance {
            name: None,
            range: None,
            outputs,
            inputs,
            controls,
        }
    }

    /// `and g (out, in1, in2, ...)`
    pub fn n_input(output: LValue, inputs: Vec<ExprId>) -> Self {
        Self::with_terminals(vec![output], inputs, Vec::new())
    }

    /// `buf g (out1, out2, ..., in)`
    pub fn n_output(outputs: Vec<LValue>, input: ExprId) -> Self {
        Self::with_terminals(outputs, vec![input], Vec::new())
    }

    /// `bufif0 g (out, in, enable)`
    pub fn enable(output: LValue, input: ExprId, enable: ExprId) -> Self {
        Self::with_terminals(vec![output], vec![input], vec![enable])
    }

    /// `nmos s (out, in, control)`
    pub fn mos(output: LValue, input: ExprId, control: ExprId) -> Self {
        Self::with_terminals(vec![output], vec![input], vec![control])
    }

    /// `cmos s (out, in, ncontrol, pcontrol)`
    pub fn cmos(output: LValue, input: ExprId, ncontrol: ExprId, pcontrol: ExprId) -> Self {
        Self::with_terminals(vec![output], vec![input], vec![ncontrol, pcontrol])
    }

    /// `tran s (a, b)`: both terminals are bidirectional.
    pub fn pass(a: LValue, b: LValue) -> Self {
        Self::with_terminals(vec![a, b], Vec::new(), Vec::new())
    }

    /// `tranif1 s (a, b, enable)`
    pub fn pass_enable(a: LValue, b: LValue, enable: ExprId) -> Self {
        Self::with_terminals(vec![a, b], Vec::new(), vec![enable])
    }

    /// `pullup p (out)`
    pub fn pull(output: LValue) -> Self {
        Self::with_terminals(vec![output], Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn named(mut self, name: IdentId, range: Option<Range>) -> Self {
        self.name = Some(name);
        self.range = range;
        self
    }
}

/// `and #(1) g1 (...), g2 (...);`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GateInstantiation {
    pub kind: GateKind,
    pub drive: Option<DriveStrength>,
    pub delay: Option<Delay>,
    pub instances: AstList<GateInstance>,
    pub line: u32,
}

/// Instance of a user-defined primitive: output first, then inputs.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UdpInstance {
    pub name: Option<IdentId>,
    pub range: Option<Range>,
    pub output: LValue,
    pub inputs: Vec<ExprId>,
}

/// `my_udp #(2) u1 (...), u2 (...);`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UdpInstantiation {
    pub udp_name: IdentId,
    pub drive: Option<DriveStrength>,
    pub delay: Option<Delay>,
    pub instances: AstList<UdpInstance>,
    pub line: u32,
}
