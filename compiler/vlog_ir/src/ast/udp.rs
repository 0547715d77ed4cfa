//! User-defined primitive declarations.

use crate::containers::AstList;
use crate::{IdentId, Name};

use super::Number;

/// The single output port of a UDP.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UdpOutput {
    pub name: IdentId,
    /// `output reg q`: sequential primitive.
    pub is_reg: bool,
    /// `output reg q = 1'b0`
    pub initial: Option<Number>,
}

/// One row of a UDP state table, e.g. `0 1 : ? : 1`.
///
/// `inputs` holds the level and edge symbols of the input columns as written
/// (whitespace removed). Combinational rows have no `current` state column.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UdpTableEntry {
    pub inputs: Name,
    pub current: Option<char>,
    pub output: char,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum UdpBody {
    Combinational(AstList<UdpTableEntry>),
    Sequential {
        /// `initial q = 1'b1;`
        initial: Option<Number>,
        entries: AstList<UdpTableEntry>,
    },
}

impl UdpBody {
    pub fn entries(&self) -> &AstList<UdpTableEntry> {
        match self {
            UdpBody::Combinational(entries) | UdpBody::Sequential { entries, .. } => entries,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UdpDecl {
    pub name: IdentId,
    pub output: UdpOutput,
    pub inputs: AstList<IdentId>,
    pub body: UdpBody,
    pub line: u32,
}

impl UdpDecl {
    pub fn is_sequential(&self) -> bool {
        matches!(self.body, UdpBody::Sequential { .. })
    }
}
