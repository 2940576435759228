use fnlsync::discovery::external::parse_listing;
use fnlsync::{discover_sources, DiscoveryError, Lister};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn source_tree() -> TempDir {
    let td = TempDir::new().unwrap();
    fs::create_dir_all(td.path().join("core")).unwrap();
    fs::create_dir_all(td.path().join("plugins/lsp")).unwrap();
    fs::write(td.path().join("init.fnl"), "(require :core)").unwrap();
    fs::write(td.path().join("core/keys.fnl"), "").unwrap();
    fs::write(td.path().join("plugins/lsp/setup.fnl"), "").unwrap();
    fs::write(td.path().join("plugins/readme.md"), "").unwrap();
    td
}

#[test]
fn test_builtin_discovery_is_recursive_and_relative() {
    let td = source_tree();

    let files = discover_sources(td.path(), &Lister::Builtin, "fnl").unwrap();
    assert_eq!(
        files,
        vec![
            PathBuf::from("core/keys.fnl"),
            PathBuf::from("init.fnl"),
            PathBuf::from("plugins/lsp/setup.fnl"),
        ]
    );
}

#[test]
fn test_builtin_discovery_with_other_extension() {
    let td = source_tree();

    let files = discover_sources(td.path(), &Lister::Builtin, "md").unwrap();
    assert_eq!(files, vec![PathBuf::from("plugins/readme.md")]);
}

#[test]
fn test_listing_matches_lister_output_format() {
    // fd prints paths relative to the search root
    let files = parse_listing("init.fnl\ncore/keys.fnl\n./plugins/lsp/setup.fnl\n");
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|p| p.is_relative()));
    assert_eq!(files[2], PathBuf::from("plugins/lsp/setup.fnl"));
}

#[cfg(unix)]
#[test]
fn test_failing_lister_is_fatal() {
    let td = source_tree();
    let lister = Lister::External(PathBuf::from("false"));

    let err = discover_sources(td.path(), &lister, "fnl").unwrap_err();
    assert!(matches!(err, DiscoveryError::ListerFailed { .. }));
}
