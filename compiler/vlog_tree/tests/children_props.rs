//! Property tests for the module children graph.

use proptest::prelude::*;
use vlog_ir::{
    AstArena, AstList, ModuleId, ModuleItem, ModuleItemKind, PortConnections, SourceItem,
};
use vlog_tree::{get_children, resolve_modules, SourceTree};

const LEAVES: [&str; 4] = ["alu", "regfile", "decoder", "missing"];

/// Declares every leaf except `missing`, plus `top` instantiating `picks`.
fn build(picks: &[usize]) -> (AstArena, SourceTree, ModuleId, Vec<ModuleId>) {
    let mut arena = AstArena::new();
    let mut leaves = Vec::new();
    for name in &LEAVES[..3] {
        let ident = arena.new_identifier(name, 1);
        leaves.push(arena.new_module_declaration(ident, 1).finish(&mut arena));
    }

    let mut items = AstList::new();
    for (index, &pick) in picks.iter().enumerate() {
        let type_name = arena.new_identifier(LEAVES[pick], 2);
        let inst_name = arena.new_identifier(&format!("u{index}"), 2);
        let inst = arena.new_module_instance(inst_name, None, PortConnections::default());
        let instantiation =
            arena.new_module_instantiation(type_name, AstList::new(), AstList::from(vec![inst]), 2);
        items.push(ModuleItem::new(ModuleItemKind::Module(instantiation), 2));
    }
    let top_name = arena.new_identifier("top", 1);
    let top = arena
        .new_module_declaration(top_name, 1)
        .items(items)
        .finish(&mut arena);

    let mut tree = SourceTree::new();
    let mut sources: AstList<SourceItem> = leaves.iter().copied().map(SourceItem::Module).collect();
    sources.push_front(SourceItem::Module(top));
    tree.add_source(&arena, sources);
    (arena, tree, top, leaves)
}

proptest! {
    /// Children are the distinct declared types in first-seen order, no
    /// matter how many times each is instantiated.
    #[test]
    fn children_are_distinct_first_seen(picks in prop::collection::vec(0..LEAVES.len(), 0..24)) {
        let (mut arena, tree, top, leaves) = build(&picks);
        let report = resolve_modules(&tree, &mut arena);

        let mut expected = Vec::new();
        for &pick in &picks {
            if let Some(&leaf) = leaves.get(pick) {
                if !expected.contains(&leaf) {
                    expected.push(leaf);
                }
            }
        }
        let missing = picks.iter().filter(|&&pick| pick == 3).count();

        let children: Vec<ModuleId> = get_children(&arena, top).iter().copied().collect();
        prop_assert_eq!(children, expected);
        prop_assert_eq!(report.unresolved.len(), missing);
        prop_assert_eq!(report.resolved, picks.len() - missing);
    }
}
