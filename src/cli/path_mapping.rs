use std::path::{Path, PathBuf};

/// Map a source-relative path into its output path under `target_dir`.
/// Directory components are kept as-is; only the extension of the final
/// segment is replaced (one is appended if it has none).
pub fn map_source_to_target(target_dir: &Path, relative_source: &Path, extension: &str) -> PathBuf {
    let mut out = target_dir.join(relative_source);
    out.set_extension(extension);
    out
}
