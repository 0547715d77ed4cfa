//! UDP, config, library and source item constructors.

use crate::ast::{
    ConfigDecl, ConfigRule, IdentRole, LibCell, LibraryDecl, LibraryKind, SourceItem, UdpBody,
    UdpDecl, UdpOutput, UdpTableEntry,
};
use crate::containers::AstList;
use crate::{AstArena, ConfigId, IdentId, LibraryId, UdpId};

impl AstArena {
    pub fn new_udp_declaration(
        &mut self,
        name: IdentId,
        output: UdpOutput,
        inputs: AstList<IdentId>,
        body: UdpBody,
        line: u32,
    ) -> UdpId {
        self.set_identifier_role(name, IdentRole::Udp);
        self.set_identifier_role(output.name, IdentRole::Port);
        for &input in &inputs {
            self.set_identifier_role(input, IdentRole::Port);
        }
        self.alloc_udp(UdpDecl {
            name,
            output,
            inputs,
            body,
            line,
        })
    }

    /// One state table row. Whitespace between input symbols is dropped.
    pub fn new_udp_table_entry(
        &mut self,
        inputs: &str,
        current: Option<char>,
        output: char,
    ) -> UdpTableEntry {
        let symbols: String = inputs.chars().filter(|c| !c.is_whitespace()).collect();
        UdpTableEntry {
            inputs: self.intern(&symbols),
            current,
            output,
        }
    }

    pub fn new_config_declaration(
        &mut self,
        name: IdentId,
        design: AstList<LibCell>,
        rules: AstList<ConfigRule>,
        line: u32,
    ) -> ConfigId {
        self.set_identifier_role(name, IdentRole::Config);
        self.alloc_config(ConfigDecl {
            name,
            design,
            rules,
            line,
        })
    }

    /// `[library.]cell`
    pub fn new_lib_cell(&mut self, library: Option<&str>, cell: IdentId) -> LibCell {
        LibCell {
            library: library.map(|lib| self.intern(lib)),
            cell,
        }
    }

    /// `library name paths -incdir incdirs;`
    pub fn new_library_declaration(
        &mut self,
        name: &str,
        paths: &[&str],
        incdirs: &[&str],
        line: u32,
    ) -> LibraryId {
        let name = self.intern(name);
        let paths = paths.iter().map(|path| self.intern(path)).collect();
        let incdirs = incdirs.iter().map(|dir| self.intern(dir)).collect();
        self.alloc_library(LibraryDecl {
            kind: LibraryKind::Library {
                name,
                paths,
                incdirs,
            },
            line,
        })
    }

    /// `include path;` in a library map.
    pub fn new_library_include(&mut self, path: &str, line: u32) -> LibraryId {
        let path = self.intern(path);
        self.alloc_library(LibraryDecl {
            kind: LibraryKind::Include { path },
            line,
        })
    }

    /// Top-level construct the source tree does not store.
    pub fn new_unsupported_item(&mut self, description: &str, line: u32) -> SourceItem {
        SourceItem::Unsupported {
            line,
            description: self.intern(description),
        }
    }
}
