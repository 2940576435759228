//! Statistics for a build run

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::build::engine::{FileOutcome, FileReport};

/// Summary of a build run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStatistics {
    /// Number of source files found
    pub discovered: usize,
    /// Number of files recompiled
    pub compiled: usize,
    /// Number of files already up to date
    pub skipped: usize,
    /// Total bytes written to outputs
    pub bytes_written: u64,
    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for BuildStatistics {
    fn default() -> Self {
        Self {
            discovered: 0,
            compiled: 0,
            skipped: 0,
            bytes_written: 0,
            elapsed_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl BuildStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one processed file
    pub fn record(&mut self, report: &FileReport) {
        match report.outcome {
            FileOutcome::Compiled => self.compiled += 1,
            FileOutcome::Skipped => self.skipped += 1,
        }
        self.bytes_written += report.bytes_written;
    }

    /// Stamp the run duration
    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    pub fn processed(&self) -> usize {
        self.compiled + self.skipped
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "{} files: {} compiled, {} skipped, {} bytes written in {:.1}s",
            self.discovered,
            self.compiled,
            self.skipped,
            self.bytes_written,
            self.elapsed_ms as f32 / 1000.0
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
