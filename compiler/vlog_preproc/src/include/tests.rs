#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

fn found_in_first_dir(file: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.first().map(|dir| dir.join(file))
}

fn never_found(_file: &str, _dirs: &[PathBuf]) -> Option<PathBuf> {
    None
}

#[test]
fn test_include_pushes_file() {
    let mut ctx = PreprocessorContext::with_search_dirs([PathBuf::from("inc")]);
    ctx.set_root_file("top.v");

    let path = ctx.include(4, "defs.vh", &found_in_first_dir);
    assert_eq!(path, Some(PathBuf::from("inc/defs.vh")));
    assert_eq!(ctx.current_file(), Some("defs.vh"));
    assert_eq!(ctx.file_depth(), 2);

    let record = ctx.includes().first().unwrap();
    assert_eq!(record.file, "defs.vh");
    assert_eq!(record.line, 4);
    assert!(record.found());
}

#[test]
fn test_missing_include_is_recorded() {
    let mut ctx = PreprocessorContext::new();
    assert_eq!(ctx.include(2, "missing.vh", &never_found), None);
    assert!(!ctx.includes().first().unwrap().found());
    assert_eq!(ctx.current_file(), Some("missing.vh"));
}

#[test]
fn test_end_include_restores_parent() {
    let mut ctx = PreprocessorContext::new();
    ctx.set_root_file("top.v");
    ctx.include(1, "a.vh", &never_found);
    ctx.include(2, "b.vh", &never_found);

    assert_eq!(ctx.end_include(10).unwrap(), "b.vh");
    assert_eq!(ctx.current_file(), Some("a.vh"));
    assert_eq!(ctx.end_include(11).unwrap(), "a.vh");
    assert_eq!(ctx.current_file(), Some("top.v"));
}

#[test]
fn test_end_include_never_pops_root() {
    let mut ctx = PreprocessorContext::new();
    ctx.set_root_file("top.v");
    assert_eq!(
        ctx.end_include(3),
        Err(PreprocError::IncludeStackEmpty { line: 3 })
    );
    assert_eq!(ctx.current_file(), Some("top.v"));
}

#[test]
fn test_search_dirs_resolver() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let dirs = [PathBuf::from("/nonexistent"), manifest_dir.clone()];
    let found = SearchDirs.resolve("Cargo.toml", &dirs);
    assert_eq!(found, Some(manifest_dir.join("Cargo.toml")));

    assert_eq!(SearchDirs.resolve("no_such_file.vh", &[manifest_dir]), None);
}

#[test]
fn test_search_dirs_absolute_path() {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let file = manifest.to_str().unwrap();
    assert_eq!(SearchDirs.resolve(file, &[]), Some(manifest));
}
