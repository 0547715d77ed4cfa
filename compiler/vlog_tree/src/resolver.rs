//! Module resolution and the module children graph.
//!
//! Resolution runs once parsing has finished: each instantiation's type name
//! is compared (segment by segment, so hierarchical names match) against the
//! declared modules of the tree, then the primitives. A name found in neither
//! is a black box and stays [`Resolution::Unresolved`].

use rustc_hash::FxHashSet;
use vlog_ir::{identifier_to_string, AstArena, AstList, AstTable, IdentId, ModuleId, Resolution};

use crate::SourceTree;

/// Outcome of [`resolve_modules`]. Unresolved names are not errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Instantiations linked to a module or UDP declaration.
    pub resolved: usize,
    /// Type names of instantiations left unresolved, in walk order.
    pub unresolved: Vec<String>,
}

/// Link every module instantiation in `tree` to its declaration.
///
/// Running it again recomputes every link from scratch.
pub fn resolve_modules(tree: &SourceTree, arena: &mut AstArena) -> ResolutionReport {
    let mut report = ResolutionReport::default();

    for &module in tree.modules() {
        let mut resolutions = Vec::new();
        for inst in arena.get_module(module).module_instantiations() {
            let resolution = lookup(tree, arena, inst.module_name);
            if resolution.is_resolved() {
                report.resolved += 1;
            } else {
                let name = identifier_to_string(arena, inst.module_name);
                tracing::debug!(line = inst.line, module = name.as_str(), "unresolved module");
                report.unresolved.push(name);
            }
            resolutions.push(resolution);
        }

        let mut next = resolutions.into_iter();
        arena.get_module_mut(module).for_each_instantiation_mut(|inst| {
            inst.resolution = next.next().unwrap_or_default();
        });
    }

    tracing::debug!(
        resolved = report.resolved,
        unresolved = report.unresolved.len(),
        "module resolution finished"
    );
    report
}

fn lookup(tree: &SourceTree, arena: &AstArena, name: IdentId) -> Resolution {
    if let Some(&module) = tree
        .modules()
        .iter()
        .find(|&&module| arena.identifiers_equal(arena.get_module(module).name, name))
    {
        return Resolution::Module(module);
    }
    tree.udps()
        .iter()
        .find(|&&udp| arena.identifiers_equal(arena.get_udp(udp).name, name))
        .map_or(Resolution::Unresolved, |&udp| Resolution::Udp(udp))
}

/// Distinct module types `module` instantiates, in first-seen order.
///
/// Only resolved instantiations contribute, so [`resolve_modules`] must run
/// first. UDP and black-box instances are not children.
pub fn get_children(arena: &AstArena, module: ModuleId) -> AstList<ModuleId> {
    let mut seen = FxHashSet::default();
    arena
        .get_module(module)
        .module_instantiations()
        .into_iter()
        .filter_map(|inst| inst.resolution.module())
        .filter(|&child| seen.insert(child))
        .collect()
}

/// Children of every module in `tree`, keyed by module name.
///
/// When two modules share a name the first declaration's entry is kept.
pub fn get_all_children(tree: &SourceTree, arena: &AstArena) -> AstTable<AstList<ModuleId>> {
    let mut table = AstTable::new();
    for &module in tree.modules() {
        let name = identifier_to_string(arena, arena.get_module(module).name);
        if table.insert(&name, get_children(arena, module)).is_err() {
            tracing::warn!(
                module = name.as_str(),
                line = arena.get_module(module).line,
                "duplicate module declaration"
            );
        }
    }
    table
}
