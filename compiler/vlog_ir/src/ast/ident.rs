//! Identifiers.

use crate::{ExprId, IdentId, Name};

/// Whether an identifier names user code or a language built-in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IdentKind {
    /// Ordinary identifier.
    #[default]
    Simple,
    /// System identifier such as `$display` or `$time`.
    System,
}

/// Optional bit-select or part-select attached to an identifier.
///
/// The two selects are mutually exclusive: setting one replaces the other.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IdentQualifier {
    /// No select.
    #[default]
    None,
    /// Bit-select `name[index]`.
    Index(ExprId),
    /// Part-select `name[high:low]`.
    Range { high: ExprId, low: ExprId },
}

/// What an identifier refers to.
///
/// Unknown at construction; grammar actions refine it once the identifier's
/// use is known.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IdentRole {
    #[default]
    Unknown,
    Module,
    Instance,
    Udp,
    Net,
    Reg,
    Variable,
    Parameter,
    Port,
    Genvar,
    Event,
    Function,
    Task,
    Block,
    Config,
    Library,
}

/// Identifier node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: Name,
    pub kind: IdentKind,
    pub qualifier: IdentQualifier,
    pub role: IdentRole,
    pub line: u32,
    /// Next segment of a hierarchical name (`a.b.c`).
    pub next: Option<IdentId>,
}

impl Identifier {
    pub fn new(name: Name, kind: IdentKind, line: u32) -> Self {
        Identifier {
            name,
            kind,
            qualifier: IdentQualifier::None,
            role: IdentRole::Unknown,
            line,
            next: None,
        }
    }

    /// Returns `true` for system identifiers.
    pub fn is_system(&self) -> bool {
        matches!(self.kind, IdentKind::System)
    }

    /// Returns `true` if further segments follow this one.
    pub fn is_hierarchical(&self) -> bool {
        self.next.is_some()
    }

    /// The part-select bounds, if this identifier carries one.
    pub fn range(&self) -> Option<(ExprId, ExprId)> {
        match self.qualifier {
            IdentQualifier::Range { high, low } => Some((high, low)),
            _ => None,
        }
    }

    /// The bit-select index, if this identifier carries one.
    pub fn index(&self) -> Option<ExprId> {
        match self.qualifier {
            IdentQualifier::Index(index) => Some(index),
            _ => None,
        }
    }
}
