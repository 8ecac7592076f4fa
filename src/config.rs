//! Optional `config.toml` and its merge with command-line overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::cli::args::Args;
use crate::constants;
use crate::display::DisplayConfig;

/// Error reading or parsing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// `[display]` table of the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub width: Option<usize>,
    pub max_columns: Option<usize>,
}

/// Contents of `config.toml`; every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub chunk_size: Option<usize>,
    pub display: DisplaySection,
}

impl FileConfig {
    /// Parses config text; `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config TOML.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`. A missing file yields the default config unless
    /// `required` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or malformed, or if it is
    /// missing and `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Default location: `<config dir>/bikeshare/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(constants::APP_NAME).join(constants::CONFIG_FILE_NAME))
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub chunk_size: usize,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            chunk_size: constants::DEFAULT_CHUNK_SIZE,
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Merges command-line flags over file values over defaults.
    #[must_use]
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: args
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or(defaults.data_dir),
            chunk_size: args
                .chunk_size
                .or(file.chunk_size)
                .unwrap_or(defaults.chunk_size)
                .max(1),
            display: DisplayConfig {
                width: args
                    .width
                    .or(file.display.width)
                    .unwrap_or(defaults.display.width),
                max_columns: args
                    .max_columns
                    .or(file.display.max_columns)
                    .unwrap_or(defaults.display.max_columns),
            },
        }
    }

    /// Loads the config file named by `--config` (or the default one) and
    /// merges it with `args`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be used, or
    /// if an explicitly named file is missing.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let file = match (&args.config, default_config_path()) {
            (Some(path), _) => FileConfig::load(path, true)?,
            (None, Some(path)) => FileConfig::load(&path, false)?,
            (None, None) => FileConfig::default(),
        };
        Ok(Self::resolve(args, file))
    }
}
