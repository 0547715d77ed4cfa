//! Library map and configuration declarations.

use crate::containers::AstList;
use crate::{IdentId, Name};

/// `[library.]cell` reference.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LibCell {
    pub library: Option<Name>,
    pub cell: IdentId,
}

/// Right-hand side of a config rule.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum RuleClause {
    /// `liblist lib1 lib2`
    Liblist(AstList<Name>),
    /// `use [lib.]cell[:config]`
    Use { cell: LibCell, config: bool },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConfigRule {
    /// `default liblist ...;`
    Default { liblist: AstList<Name> },
    /// `instance top.u1 <clause>;`
    Instance { path: IdentId, clause: RuleClause },
    /// `cell [lib.]name <clause>;`
    Cell { cell: LibCell, clause: RuleClause },
}

/// `config name; design ...; rules... endconfig`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConfigDecl {
    pub name: IdentId,
    pub design: AstList<LibCell>,
    pub rules: AstList<ConfigRule>,
    pub line: u32,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LibraryKind {
    /// `library name path, path -incdir dir, dir;`
    Library {
        name: Name,
        paths: AstList<Name>,
        incdirs: AstList<Name>,
    },
    /// `include path;` inside a library map.
    Include { path: Name },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LibraryDecl {
    pub kind: LibraryKind,
    pub line: u32,
}
