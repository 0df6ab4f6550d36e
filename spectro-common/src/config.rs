//! Configuration loading and value resolution
//!
//! Every setting follows the same priority order:
//! 1. Command-line argument (clap also folds in the matching environment variable)
//! 2. TOML config file
//! 3. Compiled default
//!
//! A missing config file is never fatal: it logs a warning and the compiled
//! defaults apply. A config file that exists but does not parse is an error.

use crate::params::ConversionParams;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SPECTRO_CONFIG";

/// Input folder used when neither CLI nor config file name one
pub const DEFAULT_INPUT_FOLDER: &str = "musicas";

/// Output folder used when neither CLI nor config file name one
pub const DEFAULT_OUTPUT_FOLDER: &str = "espectrogramas";

/// On-disk configuration file (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Folder holding the audio files
    pub input_folder: Option<PathBuf>,
    /// Folder receiving the rendered images
    pub output_folder: Option<PathBuf>,
    /// Conversion parameter overrides
    pub params: ParamsConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Optional conversion parameter overrides
///
/// Used both for the `[params]` table of the config file and for the CLI
/// layer, so the two can be merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub n_mels: Option<usize>,
    pub hop_length: Option<usize>,
    pub sample_rate: Option<u32>,
    pub case_sensitive_extensions: Option<bool>,
}

impl ParamsConfig {
    /// Overlay `self` on top of `lower`: any value set in `self` wins.
    pub fn merged_over(&self, lower: &ParamsConfig) -> ParamsConfig {
        ParamsConfig {
            n_mels: self.n_mels.or(lower.n_mels),
            hop_length: self.hop_length.or(lower.hop_length),
            sample_rate: self.sample_rate.or(lower.sample_rate),
            case_sensitive_extensions: self
                .case_sensitive_extensions
                .or(lower.case_sensitive_extensions),
        }
    }

    /// Fill unset values with compiled defaults
    pub fn to_conversion_params(&self) -> ConversionParams {
        let defaults = ConversionParams::default();
        ConversionParams {
            n_mels: self.n_mels.unwrap_or(defaults.n_mels),
            hop_length: self.hop_length.unwrap_or(defaults.hop_length),
            sample_rate: self.sample_rate.unwrap_or(defaults.sample_rate),
            render: defaults.render,
        }
    }

    /// Extension matching mode, literal matching only when asked for
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive_extensions.unwrap_or(false)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Platform config file location: `<config_dir>/spectro/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("spectro").join("config.toml"))
}

/// Pick the config file to read
///
/// An explicit path (CLI or `SPECTRO_CONFIG`) always wins; otherwise the
/// platform default is used when it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    default_config_path().filter(|p| p.exists())
}

/// Load a TOML config file
///
/// Missing file → warning + defaults. Unreadable file → `Error::Io`, malformed
/// file → `Error::Config`.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "Config file not found, using defaults"
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;

    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Resolve a folder setting: CLI → config file → compiled default
pub fn resolve_folder(
    cli_arg: Option<&Path>,
    config_value: Option<&Path>,
    default: &str,
) -> PathBuf {
    cli_arg
        .or(config_value)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default))
}
