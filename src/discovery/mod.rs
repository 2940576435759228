//! Source file discovery
//!
//! Produces the list of source files under a root directory, relative to that
//! root. Enumeration is either delegated to an external lister such as `fd`
//! or performed in-process with `walkdir`. Neither path touches the process
//! working directory.

use std::path::{Path, PathBuf};

use crate::error::{DiscoveryError, DiscoveryResult};

pub mod directory;
pub mod external;
pub mod filter;

/// How source files are enumerated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lister {
    /// Run an external program as `<program> <pattern> .` inside the root
    External(PathBuf),
    /// Walk the tree in-process
    Builtin,
}

impl Lister {
    pub fn describe(&self) -> String {
        match self {
            Lister::External(program) => program.display().to_string(),
            Lister::Builtin => "builtin walker".to_string(),
        }
    }
}

/// Find all files under `root` ending in `.<extension>`, as paths relative to `root`
pub fn discover_sources(
    root: &Path,
    lister: &Lister,
    extension: &str,
) -> DiscoveryResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DiscoveryError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    log::debug!(
        "Discovering *.{} under {} using {}",
        extension,
        root.display(),
        lister.describe()
    );

    let files = match lister {
        Lister::External(program) => external::list_files(program, root, extension)?,
        Lister::Builtin => directory::find_source_files(root, extension)?,
    };

    log::debug!("Discovered {} source files", files.len());
    Ok(files)
}
