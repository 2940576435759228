//! Per-file incremental compilation
//!
//! A file is recompiled when its output is missing or older than the source.
//! The compiler's stdout is captured in full and only written once the
//! compiler has exited successfully, so a failed run never touches the output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;

use crate::build::BuildConfig;
use crate::error::{CompileError, CompileResult};

/// What happened to a single source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Compiled,
    Skipped,
}

impl FileOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            FileOutcome::Compiled => "Compiled",
            FileOutcome::Skipped => "Skipped",
        }
    }
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub outcome: FileOutcome,
    /// Bytes written to the destination; zero when skipped
    pub bytes_written: u64,
}

/// Wraps the external compiler invocation
#[derive(Debug, Clone)]
pub struct Compiler {
    program: PathBuf,
    flag: String,
    force: bool,
    create_dirs: bool,
}

impl Compiler {
    pub fn new(program: impl Into<PathBuf>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
            force: false,
            create_dirs: false,
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(&config.compiler, &config.compile_flag)
            .with_force(config.force)
            .with_create_dirs(config.create_dirs)
    }

    /// Recompile regardless of timestamps
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Create missing destination parents before writing
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Check, and if stale, compile `source` into `destination`
    pub fn process(&self, source: &Path, destination: &Path) -> CompileResult<FileReport> {
        if !self.force && !needs_rebuild(source, destination)? {
            log::debug!("{} is up to date", destination.display());
            return Ok(FileReport {
                outcome: FileOutcome::Skipped,
                bytes_written: 0,
            });
        }

        let output = self.compile(source)?;

        if self.create_dirs {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(|e| CompileError::io(parent, e))?;
            }
        }
        fs::write(destination, &output).map_err(|e| CompileError::io(destination, e))?;

        Ok(FileReport {
            outcome: FileOutcome::Compiled,
            bytes_written: output.len() as u64,
        })
    }

    /// Run the compiler on `source` and return its stdout
    pub fn compile(&self, source: &Path) -> CompileResult<String> {
        let mut command = Command::new(&self.program);
        if !self.flag.is_empty() {
            command.arg(&self.flag);
        }
        command.arg(source);

        log::debug!("Running {:?}", command);
        let output = command.output().map_err(|source| CompileError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(CompileError::Failed {
                path: source.to_path_buf(),
                status: output.status,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        if !output.stderr.is_empty() {
            log::warn!(
                "{} wrote to stderr: {}",
                source.display(),
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        String::from_utf8(output.stdout).map_err(|_| CompileError::InvalidOutput {
            path: source.to_path_buf(),
        })
    }
}

/// A destination is stale when it is missing or older than its source
pub fn needs_rebuild(source: &Path, destination: &Path) -> CompileResult<bool> {
    let dest_mtime = match fs::metadata(destination) {
        Ok(meta) => meta.modified().map_err(|e| CompileError::io(destination, e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(CompileError::io(destination, e)),
    };
    let source_mtime = modified(source)?;

    Ok(dest_mtime < source_mtime)
}

fn modified(path: &Path) -> CompileResult<SystemTime> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| CompileError::io(path, e))
}
