//! Configuration for an incremental build run

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::discovery::Lister;
use crate::error::ConfigError;

/// Default external lister
pub const DEFAULT_LISTER: &str = "fd";
/// Flag passed to the compiler before the source path
pub const DEFAULT_COMPILE_FLAG: &str = "-c";
pub const DEFAULT_EXTENSION: &str = "fnl";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "lua";

/// Build configuration, constructed once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Root of the source tree
    pub source_dir: PathBuf,
    /// Root of the mirrored output tree
    pub target_dir: PathBuf,
    /// How source files are enumerated
    pub lister: Lister,
    /// Compiler executable
    pub compiler: PathBuf,
    /// Flag placed before the source path; empty means none
    pub compile_flag: String,
    /// Extension of source files, without the dot
    pub extension: String,
    /// Extension of compiled files, without the dot
    pub output_extension: String,
    /// Recompile even when the output is up to date
    pub force: bool,
    /// Create missing parent directories of outputs
    pub create_dirs: bool,
}

impl BuildConfig {
    /// Defaults for a Neovim configuration rooted at `home`
    pub fn for_home(home: &Path) -> Self {
        let config_dir = home.join(".config").join("nvim");
        Self {
            source_dir: config_dir.join("fnl"),
            target_dir: config_dir.join("lua"),
            lister: Lister::External(PathBuf::from(DEFAULT_LISTER)),
            compiler: config_dir.join("scripts").join("fennel"),
            compile_flag: DEFAULT_COMPILE_FLAG.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            force: false,
            create_dirs: false,
        }
    }

    /// Defaults derived from the invoking user's home directory
    pub fn from_home_dir() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::for_home(&home))
    }

    /// Overlay the values present in a config file
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(dir) = file.source_dir {
            self.source_dir = dir;
        }
        if let Some(dir) = file.target_dir {
            self.target_dir = dir;
        }
        if let Some(program) = file.lister {
            self.lister = Lister::External(program);
        }
        if file.builtin_lister == Some(true) {
            self.lister = Lister::Builtin;
        }
        if let Some(compiler) = file.compiler {
            self.compiler = compiler;
        }
        if let Some(flag) = file.compile_flag {
            self.compile_flag = flag;
        }
        if let Some(ext) = file.extension {
            self.extension = ext;
        }
        if let Some(ext) = file.output_extension {
            self.output_extension = ext;
        }
        if let Some(create) = file.create_dirs {
            self.create_dirs = create;
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_extension("extension", &self.extension)?;
        validate_extension("output extension", &self.output_extension)?;

        if self.compiler.as_os_str().is_empty() {
            return Err(ConfigError::invalid("compiler path must not be empty"));
        }

        if let Lister::External(program) = &self.lister {
            if program.as_os_str().is_empty() {
                return Err(ConfigError::invalid("lister path must not be empty"));
            }
        }

        // Outputs would overwrite their own sources
        if self.source_dir == self.target_dir && self.extension == self.output_extension {
            return Err(ConfigError::invalid(
                "source and target directories are the same and extensions match",
            ));
        }

        Ok(())
    }

    /// Absolute path of a source file given its path relative to the source root
    pub fn source_path(&self, relative: &Path) -> PathBuf {
        self.source_dir.join(relative)
    }
}

fn validate_extension(label: &str, extension: &str) -> Result<(), ConfigError> {
    if extension.is_empty() {
        return Err(ConfigError::invalid(format!("{} must not be empty", label)));
    }
    if !extension
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ConfigError::invalid(format!(
            "{} '{}' may only contain letters, digits, '_' and '-'",
            label, extension
        )));
    }
    Ok(())
}

/// Optional settings read from a JSON config file
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub source_dir: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
    pub lister: Option<PathBuf>,
    pub builtin_lister: Option<bool>,
    pub compiler: Option<PathBuf>,
    pub compile_flag: Option<String>,
    pub extension: Option<String>,
    pub output_extension: Option<String>,
    pub create_dirs: Option<bool>,
}

impl FileConfig {
    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
