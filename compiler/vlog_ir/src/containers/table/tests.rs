use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_insert_and_get() {
    let mut table = AstTable::new();
    assert_eq!(table.insert("WIDTH", 8), Ok(()));
    assert_eq!(table.insert("DEPTH", 16), Ok(()));
    assert_eq!(table.get("WIDTH"), Ok(&8));
    assert_eq!(table.get("DEPTH"), Ok(&16));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_insert_collision_keeps_original() {
    let mut table = AstTable::new();
    table.insert("WIDTH", 8).ok();
    assert_eq!(table.insert("WIDTH", 32), Err(TableError::KeyCollision));
    assert_eq!(table.get("WIDTH"), Ok(&8));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_insert_empty_key_fails() {
    let mut table = AstTable::new();
    assert_eq!(table.insert("", 1), Err(TableError::Fail));
    assert!(table.is_empty());
}

#[test]
fn test_get_missing_does_not_mutate() {
    let mut table = AstTable::new();
    table.insert("A", 1).ok();
    let before = table.clone();
    assert_eq!(table.get("B"), Err(TableError::KeyNotFound));
    assert_eq!(table, before);
}

#[test]
fn test_update_requires_existing_key() {
    let mut table = AstTable::new();
    assert_eq!(table.update("A", 1), Err(TableError::KeyNotFound));
    table.insert("A", 1).ok();
    assert_eq!(table.update("A", 2), Ok(1));
    assert_eq!(table.get("A"), Ok(&2));
}

#[test]
fn test_delete() {
    let mut table = AstTable::new();
    table.insert("A", 1).ok();
    table.insert("B", 2).ok();
    table.insert("C", 3).ok();
    assert_eq!(table.delete("B"), Ok(2));
    assert_eq!(table.delete("B"), Err(TableError::KeyNotFound));
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["A", "C"]);
}

#[test]
fn test_upsert_keeps_position() {
    let mut table = AstTable::new();
    assert_eq!(table.upsert("X", 1), Ok(None));
    table.insert("Y", 2).ok();
    assert_eq!(table.upsert("X", 10), Ok(Some(1)));
    assert_eq!(
        table.iter().map(|(k, v)| (k.to_string(), *v)).collect::<Vec<_>>(),
        vec![("X".to_string(), 10), ("Y".to_string(), 2)]
    );
    assert_eq!(table.upsert("", 0), Err(TableError::Fail));
}

#[test]
fn test_entries_expose_insertion_order() {
    let mut table = AstTable::new();
    table.insert("first", ()).ok();
    table.insert("second", ()).ok();
    let keys: Vec<&str> = table.entries().iter().map(TableEntry::key).collect();
    assert_eq!(keys, vec!["first", "second"]);
    assert!(table.contains_key("second"));
}

proptest! {
    #[test]
    fn prop_duplicate_insert_reports_collision(
        key in "[A-Za-z_][A-Za-z0-9_]{0,12}",
        first in any::<i32>(),
        second in any::<i32>(),
    ) {
        let mut table = AstTable::new();
        prop_assert_eq!(table.insert(&key, first), Ok(()));
        prop_assert_eq!(table.insert(&key, second), Err(TableError::KeyCollision));
        prop_assert_eq!(table.get(&key), Ok(&first));
    }

    #[test]
    fn prop_missing_get_is_pure(
        keys in prop::collection::btree_set("[a-z]{1,6}", 0..10),
        probe in "[A-Z]{1,6}",
    ) {
        let mut table = AstTable::new();
        for key in &keys {
            table.insert(key, key.len()).ok();
        }
        let before = table.clone();
        prop_assert_eq!(table.get(&probe), Err(TableError::KeyNotFound));
        prop_assert_eq!(table, before);
    }
}
