//! Incremental compilation helper
//!
//! Scans a source tree for files of one extension, runs an external compiler
//! on each file whose output is missing or older than the source, and writes
//! the compiler's stdout to the mirrored path under a target tree.

pub mod build;
pub mod cli;
pub mod discovery;
pub mod error;

// Re-export commonly used types
pub use build::{run_batch, BuildConfig, BuildStatistics, Compiler, FileOutcome};
pub use cli::path_mapping::map_source_to_target;
pub use discovery::{discover_sources, Lister};
pub use error::{BuildError, CompileError, ConfigError, DiscoveryError};
