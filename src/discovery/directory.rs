use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{DiscoveryError, DiscoveryResult};

/// Find source files recursively under `root`, returned relative to `root`.
/// Entries are visited in file name order so the result is stable. Hidden
/// files and directories below the root are skipped, as fd does by default.
pub fn find_source_files(root: &Path, extension: &str) -> DiscoveryResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if crate::discovery::filter::is_source_file(path, extension) {
            // Entries always live under root
            if let Ok(relative) = path.strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
    }

    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}
