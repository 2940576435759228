//! Incremental build module
//!
//! Configuration, the per-file compile step, the batch driver and run statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod stats;

pub use batch::run_batch;
pub use config::{BuildConfig, FileConfig};
pub use engine::{needs_rebuild, Compiler, FileOutcome, FileReport};
pub use stats::BuildStatistics;
