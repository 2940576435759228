use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use std::process::ExitCode;

use fnlsync::build::run_batch;
use fnlsync::cli::{self, Args, CliConfig, CliResult, CliUtils};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn run(args: Args) -> CliResult<()> {
    let config = CliConfig::from_args(args)?;
    let quiet = config.is_quiet();

    log::debug!("Build configuration: {:?}", config.build_config);

    let stats = run_batch(&config.build_config, |path, outcome| {
        CliUtils::show_outcome(path, outcome, quiet)
    })?;

    if config.want_stats() {
        CliUtils::show_statistics(&stats, quiet);
    }
    if let Some(path) = &config.args.stats_json {
        CliUtils::write_statistics(&stats, path)?;
    }

    Ok(())
}
