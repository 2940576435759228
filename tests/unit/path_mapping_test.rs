use fnlsync::map_source_to_target;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[test]
fn test_scenario_mapping() {
    let out = map_source_to_target(Path::new("/home/u/.config/nvim/lua"), Path::new("a/b.fnl"), "lua");
    assert_eq!(out, PathBuf::from("/home/u/.config/nvim/lua/a/b.lua"));
}

#[test]
fn test_mapping_is_deterministic() {
    let target = Path::new("/t");
    let first = map_source_to_target(target, Path::new("x/y/z.fnl"), "lua");
    let second = map_source_to_target(target, Path::new("x/y/z.fnl"), "lua");
    assert_eq!(first, second);
}

#[test]
fn test_distinct_sources_map_to_distinct_outputs() {
    let sources = [
        "init.fnl",
        "a/init.fnl",
        "b/init.fnl",
        "a/b/init.fnl",
        "a/b.c.fnl",
        "a/b.fnl",
        "plugins.d/lsp.fnl",
    ];

    let outputs: HashSet<PathBuf> = sources
        .iter()
        .map(|s| map_source_to_target(Path::new("/t"), Path::new(s), "lua"))
        .collect();
    assert_eq!(outputs.len(), sources.len());
}

#[test]
fn test_dotted_directories_are_untouched() {
    let out = map_source_to_target(Path::new("/t"), Path::new("v1.2/mod.fnl"), "lua");
    assert_eq!(out, PathBuf::from("/t/v1.2/mod.lua"));
}
