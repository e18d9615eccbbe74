//! # Configuration Module
//!
//! This module provides configuration support for applicense, allowing the
//! scan root, extension allow-list, header template, exclusion globs, and
//! copyright year to be set in a `.applicense.toml` file.
//!
//! CLI flags always win over config values; built-in defaults fill whatever
//! neither supplies. There is intentionally no environment-variable lookup
//! for the config path: behavior is driven by flags and the config file only.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".applicense.toml";

/// Directory scanned when neither CLI nor config names one.
pub const DEFAULT_ROOT: &str = "src";

/// Main configuration struct for applicense.
///
/// All keys are optional; a missing key falls through to the CLI flag or the
/// built-in default.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
  /// Root directory to scan.
  #[serde(default)]
  pub root: Option<PathBuf>,

  /// Extension allow-list, without leading dots (e.g., "scala", "java").
  #[serde(default)]
  pub extensions: Option<Vec<String>>,

  /// Path to a custom header template file.
  #[serde(default, rename = "header-file")]
  pub header_file: Option<PathBuf>,

  /// Glob patterns for paths to exclude from processing.
  #[serde(default)]
  pub ignore: Vec<String>,

  /// Year substituted for `{{year}}` in custom templates.
  #[serde(default)]
  pub year: Option<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An extension entry is invalid.
  #[error("Invalid extension '{extension}': {message}")]
  InvalidExtension { extension: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read or
  /// parsed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config.normalize())
  }

  /// Validate the configuration.
  ///
  /// Checks that extension entries are non-empty and carry no leading dot.
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref extensions) = self.extensions {
      for ext in extensions {
        if ext.trim().is_empty() {
          return Err(ConfigError::InvalidExtension {
            extension: ext.clone(),
            message: "extension cannot be empty".to_string(),
          });
        }
        if ext.starts_with('.') {
          return Err(ConfigError::InvalidExtension {
            extension: ext.clone(),
            message: "extension should not include leading dot".to_string(),
          });
        }
      }
    }

    Ok(())
  }

  /// Normalize extension entries to lowercase for case-insensitive matching.
  fn normalize(self) -> Self {
    let extensions = self
      .extensions
      .map(|exts| exts.into_iter().map(|ext| ext.to_lowercase()).collect());

    Self { extensions, ..self }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. `.applicense.toml` in `search_dir` (the current directory in practice)
///
/// # Returns
///
/// The path to the configuration file, or `None` if no config file is found.
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
  // Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  let local_config = search_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, if any.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `search_dir` - Directory searched for `.applicense.toml`
/// * `no_config` - If true, skip config file discovery entirely
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, search_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
