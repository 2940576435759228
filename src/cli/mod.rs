//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::build::{BuildConfig, BuildStatistics, FileConfig, FileOutcome};
use crate::discovery::Lister;
use crate::error::{BuildError, BuildResult};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "fnlsync")]
#[command(about = "Incrementally compile a source tree into a mirrored target tree")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Source root (default: ~/.config/nvim/fnl)
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Target root (default: ~/.config/nvim/lua)
    #[arg(short, long)]
    pub target_dir: Option<PathBuf>,

    /// Compiler executable (default: ~/.config/nvim/scripts/fennel)
    #[arg(short, long)]
    pub compiler: Option<PathBuf>,

    /// Flag passed to the compiler before the source path (default: -c)
    #[arg(long, allow_hyphen_values = true)]
    pub compile_flag: Option<String>,

    /// External file lister (default: fd)
    #[arg(long, conflicts_with = "builtin_lister")]
    pub lister: Option<PathBuf>,

    /// Walk the source tree in-process instead of running a lister.
    /// Hidden entries are skipped like fd does; .gitignore is not consulted
    #[arg(long)]
    pub builtin_lister: bool,

    /// Source file extension (default: fnl)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Output file extension (default: lua)
    #[arg(long)]
    pub output_extension: Option<String>,

    /// JSON config file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Recompile every file, ignoring timestamps
    #[arg(short, long)]
    pub force: bool,

    /// Create missing output directories
    #[arg(long)]
    pub create_dirs: bool,

    /// Print a summary after the run
    #[arg(long)]
    pub stats: bool,

    /// Write run statistics as JSON to this file
    #[arg(long)]
    pub stats_json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress per-file output
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub build_config: BuildConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments, using the home directory for defaults
    pub fn from_args(args: Args) -> BuildResult<Self> {
        let defaults = BuildConfig::from_home_dir()?;
        Self::with_defaults(args, defaults)
    }

    /// Layer the config file and then the arguments over `defaults`
    pub fn with_defaults(args: Args, defaults: BuildConfig) -> BuildResult<Self> {
        let mut build_config = defaults;

        if let Some(path) = &args.config {
            build_config.apply_file(FileConfig::load(path)?);
        }
        Self::apply_args(&args, &mut build_config);
        build_config.validate()?;

        Ok(Self { args, build_config })
    }

    fn apply_args(args: &Args, config: &mut BuildConfig) {
        if let Some(dir) = &args.source_dir {
            config.source_dir = dir.clone();
        }
        if let Some(dir) = &args.target_dir {
            config.target_dir = dir.clone();
        }
        if let Some(compiler) = &args.compiler {
            config.compiler = compiler.clone();
        }
        if let Some(flag) = &args.compile_flag {
            config.compile_flag = flag.clone();
        }
        if let Some(lister) = &args.lister {
            config.lister = Lister::External(lister.clone());
        }
        if args.builtin_lister {
            config.lister = Lister::Builtin;
        }
        if let Some(ext) = &args.extension {
            config.extension = ext.clone();
        }
        if let Some(ext) = &args.output_extension {
            config.output_extension = ext.clone();
        }
        config.force |= args.force;
        config.create_dirs |= args.create_dirs;
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Print the per-file line, e.g. `Compiled: a/b.fnl`
    pub fn show_outcome(path: &Path, outcome: FileOutcome, quiet: bool) {
        if quiet {
            return;
        }
        let label = match outcome {
            FileOutcome::Compiled => style(outcome.label()).green(),
            FileOutcome::Skipped => style(outcome.label()).dim(),
        };
        println!("{}: {}", label, path.display());
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    /// Render the run summary block
    pub fn format_statistics(stats: &BuildStatistics) -> String {
        format!(
            "Build Statistics:\nDiscovered: {}\nProcessed: {}\nCompiled: {}\nSkipped: {}\nBytes written: {}\nElapsed: {}",
            stats.discovered,
            stats.processed(),
            stats.compiled,
            stats.skipped,
            stats.bytes_written,
            Self::format_duration(Duration::from_millis(stats.elapsed_ms))
        )
    }

    /// Print the run summary (if not in quiet mode)
    pub fn show_statistics(stats: &BuildStatistics, quiet: bool) {
        if !quiet {
            println!("\n{}", Self::format_statistics(stats));
        }
    }

    /// Write statistics as pretty JSON
    pub fn write_statistics(stats: &BuildStatistics, path: &Path) -> BuildResult<()> {
        let write = || -> anyhow::Result<()> {
            std::fs::write(path, stats.to_json()?)?;
            Ok(())
        };
        write().map_err(|source| BuildError::Stats {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &BuildError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        BuildError::Discovery(crate::error::DiscoveryError::ListerUnavailable { .. }) => {
            eprintln!("\nTip: Install the lister or use --builtin-lister");
        }
        BuildError::Compile(crate::error::CompileError::Spawn { .. }) => {
            eprintln!("\nTip: Use --compiler to point at the compiler executable");
        }
        BuildError::Config(_) => {
            eprintln!("\nTry 'fnlsync --help' for usage information.");
        }
        _ => {}
    }
}

/// Command execution result
pub type CliResult<T> = Result<T, BuildError>;
