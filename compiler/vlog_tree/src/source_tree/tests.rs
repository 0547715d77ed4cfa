use super::*;
use pretty_assertions::assert_eq;
use vlog_ir::{AstArena, UdpBody, UdpOutput};

fn module(arena: &mut AstArena, name: &str) -> ModuleId {
    let ident = arena.new_identifier(name, 1);
    arena.new_module_declaration(ident, 1).finish(arena)
}

fn udp(arena: &mut AstArena, name: &str) -> UdpId {
    let ident = arena.new_identifier(name, 1);
    let out = arena.new_identifier("q", 1);
    arena.new_udp_declaration(
        ident,
        UdpOutput {
            name: out,
            is_reg: false,
            initial: None,
        },
        AstList::new(),
        UdpBody::Combinational(AstList::new()),
        1,
    )
}

#[test]
fn test_new_tree_is_empty() {
    let tree = SourceTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.modules().len(), 0);
}

#[test]
fn test_add_source_routes_by_kind() {
    let mut arena = AstArena::new();
    let top = module(&mut arena, "top");
    let mux = udp(&mut arena, "mux");
    let leaf = module(&mut arena, "leaf");
    let unknown = arena.new_unsupported_item("interface", 7);

    let mut tree = SourceTree::new();
    tree.add_source(
        &arena,
        AstList::from(vec![
            SourceItem::Module(top),
            SourceItem::Udp(mux),
            unknown,
            SourceItem::Module(leaf),
        ]),
    );

    assert_eq!(tree.modules().iter().copied().collect::<Vec<_>>(), vec![top, leaf]);
    assert_eq!(tree.udps().iter().copied().collect::<Vec<_>>(), vec![mux]);
    assert!(tree.libraries().is_empty());
}

#[test]
fn test_add_source_accumulates() {
    let mut arena = AstArena::new();
    let a = module(&mut arena, "a");
    let b = module(&mut arena, "b");

    let mut tree = SourceTree::new();
    tree.add_source(&arena, AstList::from(vec![SourceItem::Module(a)]));
    tree.add_source(&arena, AstList::from(vec![SourceItem::Module(b)]));
    assert_eq!(tree.modules().iter().copied().collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_libraries_concatenate_in_order() {
    let mut arena = AstArena::new();
    let rtl = arena.new_library_declaration("rtl", &["rtl/*.v"], &[], 1);
    let sim = arena.new_library_declaration("sim", &["sim/*.v"], &[], 2);
    let inc = arena.new_library_include("more.map", 3);

    let mut tree = SourceTree::new();
    tree.add_library(AstList::from(vec![rtl, sim]));
    tree.add_library(AstList::from(vec![inc]));
    assert_eq!(
        tree.libraries().iter().copied().collect::<Vec<_>>(),
        vec![rtl, sim, inc]
    );
    assert!(!tree.is_empty());
}

#[test]
fn test_add_config() {
    let mut arena = AstArena::new();
    let name = arena.new_identifier("cfg", 1);
    let config = arena.new_config_declaration(name, AstList::new(), AstList::new(), 1);

    let mut tree = SourceTree::new();
    tree.add_config(config);
    assert_eq!(tree.configs().first(), Some(&config));
}
