use std::path::Path;
use std::time::Instant;

use crate::build::engine::{Compiler, FileOutcome};
use crate::build::stats::BuildStatistics;
use crate::build::BuildConfig;
use crate::cli::path_mapping::map_source_to_target;
use crate::discovery::discover_sources;
use crate::error::BuildResult;

/// Discover every source file and bring its output up to date, in discovery
/// order. Stops at the first failure; outputs written before it are kept.
/// `on_file` is called with the source-relative path after each file.
pub fn run_batch<F>(config: &BuildConfig, mut on_file: F) -> BuildResult<BuildStatistics>
where
    F: FnMut(&Path, FileOutcome),
{
    let started = Instant::now();
    let compiler = Compiler::from_config(config);
    let mut stats = BuildStatistics::new();

    let sources = discover_sources(&config.source_dir, &config.lister, &config.extension)?;
    stats.discovered = sources.len();

    for relative in &sources {
        let source = config.source_path(relative);
        let destination = map_source_to_target(&config.target_dir, relative, &config.output_extension);

        let report = compiler.process(&source, &destination)?;
        stats.record(&report);
        on_file(relative, report.outcome);
    }

    stats.finish(started.elapsed());
    log::info!("{}", stats.summary());
    Ok(stats)
}
