use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DiscoveryError, DiscoveryResult};

/// Pattern handed to the lister: a regex anchored on the file suffix
pub fn extension_pattern(extension: &str) -> String {
    format!(r"\.{}$", extension)
}

/// Run `<program> <pattern> .` with `root` as the child's working directory
pub fn list_files(program: &Path, root: &Path, extension: &str) -> DiscoveryResult<Vec<PathBuf>> {
    let pattern = extension_pattern(extension);
    log::debug!(
        "Running {} {} . in {}",
        program.display(),
        pattern,
        root.display()
    );

    let output = Command::new(program)
        .arg(&pattern)
        .arg(".")
        .current_dir(root)
        .output()
        .map_err(|source| DiscoveryError::ListerUnavailable {
            program: program.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(DiscoveryError::ListerFailed {
            program: program.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| DiscoveryError::InvalidListing {
        program: program.to_path_buf(),
    })?;

    // fd also matches directories whose names end in the extension
    let files = parse_listing(&stdout)
        .into_iter()
        .filter(|path| crate::discovery::filter::is_source_file(&root.join(path), extension))
        .collect();
    Ok(files)
}

/// Turn lister output into relative paths: one per line, blanks dropped,
/// a leading `./` removed.
pub fn parse_listing(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut line = line;
            while let Some(rest) = line.strip_prefix("./") {
                line = rest;
            }
            PathBuf::from(line)
        })
        .collect()
}
