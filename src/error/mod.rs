//! Error types for discovery, compilation and configuration

use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors raised while enumerating source files
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Source directory does not exist: {}", .path.display())]
    MissingRoot { path: PathBuf },

    #[error("Failed to run lister '{}': {source}", .program.display())]
    ListerUnavailable {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lister '{}' exited with {status}: {}", .program.display(), .stderr.trim_end())]
    ListerFailed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Lister '{}' produced non UTF-8 output", .program.display())]
    InvalidListing { program: PathBuf },

    #[error("Failed walking {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors raised while checking or compiling a single source file
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Failed to run compiler '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Compiler exited with {status} for {}", .path.display())]
    Failed {
        path: PathBuf,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("Compiler produced non UTF-8 output for {}", .path.display())]
    InvalidOutput { path: PathBuf },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while assembling the build configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot determine home directory")]
    NoHomeDir,

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Main error type for a build run
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write statistics to {}: {source}", .path.display())]
    Stats {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl BuildError {
    /// Create a user-friendly error message, including captured compiler output
    pub fn user_message(&self) -> String {
        match self {
            Self::Compile(CompileError::Failed {
                path,
                status,
                stdout,
                stderr,
            }) => {
                let mut message = format!("Compilation of {} failed ({})", path.display(), status);
                let stderr = stderr.trim_end();
                let stdout = stdout.trim_end();
                if !stderr.is_empty() {
                    message.push('\n');
                    message.push_str(stderr);
                } else if !stdout.is_empty() {
                    message.push('\n');
                    message.push_str(stdout);
                }
                message
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Convenience result type for discovery
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Convenience result type for compilation
pub type CompileResult<T> = Result<T, CompileError>;
