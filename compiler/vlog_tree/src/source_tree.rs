//! Top-level owning aggregate of a parse session.

use vlog_ir::{AstArena, AstList, ConfigId, LibraryId, ModuleId, SourceItem, UdpId};

/// Every top-level declaration parsed in one session, in source order.
///
/// Nodes live in the session's [`AstArena`]; the tree holds their handles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceTree {
    modules: AstList<ModuleId>,
    udps: AstList<UdpId>,
    libraries: AstList<LibraryId>,
    configs: AstList<ConfigId>,
}

impl SourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route freshly parsed top-level items: modules and UDPs are appended
    /// to their lists, anything else is logged and dropped.
    pub fn add_source(&mut self, arena: &AstArena, items: AstList<SourceItem>) {
        for item in items {
            match item {
                SourceItem::Module(id) => self.modules.push(id),
                SourceItem::Udp(id) => self.udps.push(id),
                SourceItem::Unsupported { line, description } => {
                    tracing::warn!(
                        line,
                        item = arena.name_str(description),
                        "ignoring unsupported top-level item"
                    );
                }
            }
        }
        tracing::trace!(
            modules = self.modules.len(),
            udps = self.udps.len(),
            "source added"
        );
    }

    /// Append library declarations; libraries accumulate across calls.
    pub fn add_library(&mut self, libraries: AstList<LibraryId>) {
        self.libraries.concat(libraries);
    }

    pub fn add_config(&mut self, config: ConfigId) {
        self.configs.push(config);
    }

    pub fn modules(&self) -> &AstList<ModuleId> {
        &self.modules
    }

    pub fn udps(&self) -> &AstList<UdpId> {
        &self.udps
    }

    pub fn libraries(&self) -> &AstList<LibraryId> {
        &self.libraries
    }

    pub fn configs(&self) -> &AstList<ConfigId> {
        &self.configs
    }

    /// Returns `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
            && self.udps.is_empty()
            && self.libraries.is_empty()
            && self.configs.is_empty()
    }
}

#[cfg(test)]
mod tests;
