//! # Configuration Module
//!
//! This module provides configuration support for licenser. The only
//! setting is the directory holding the license texts.
//!
//! Configuration is read from a `.licenser.toml` file in the current
//! directory, or from the file given with `--config`. A `--license-dir` flag
//! on the command line takes precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::licenses::DEFAULT_LICENSE_DIR;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".licenser.toml";

/// Settings loaded from a config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Directory containing `<license>.txt` resources. A relative path is
  /// taken relative to the directory holding the config file.
  #[serde(default, rename = "license-dir")]
  pub license_dir: Option<PathBuf>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}'")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}'")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value in the config file is unusable.
  #[error("Invalid value for '{key}' in '{path}': {message}")]
  InvalidValue {
    path: PathBuf,
    key: &'static str,
    message: String,
  },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate(path)?;
    config.license_dir = config.license_dir.map(|dir| match path.parent() {
      Some(base) if dir.is_relative() => base.join(dir),
      _ => dir,
    });
    Ok(config)
  }

  fn validate(&self, path: &Path) -> Result<(), ConfigError> {
    if self.license_dir.as_ref().is_some_and(|dir| dir.as_os_str().is_empty()) {
      return Err(ConfigError::InvalidValue {
        path: path.to_path_buf(),
        key: "license-dir",
        message: "must not be empty".to_string(),
      });
    }
    Ok(())
  }
}

/// Find the config file to use.
///
/// An explicit path must exist; otherwise `.licenser.toml` in `search_dir`
/// is used when present.
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Result<Option<PathBuf>> {
  if let Some(path) = explicit_path {
    if !path.exists() {
      anyhow::bail!("Config file does not exist: {}", path.display());
    }
    verbose_log!("Using explicit config path: {}", path.display());
    return Ok(Some(path.to_path_buf()));
  }

  let local = search_dir.join(DEFAULT_CONFIG_FILENAME);
  if local.is_file() {
    verbose_log!("Using config: {}", local.display());
    return Ok(Some(local));
  }

  verbose_log!("No config file found");
  Ok(None)
}

/// Load the configuration, or `None` when there is no config file or
/// `no_config` is set.
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, search_dir)? {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}

/// Pick the license directory: CLI flag, then config, then the compiled-in
/// default.
pub fn resolve_license_dir(cli_dir: Option<&Path>, config: Option<&Config>) -> PathBuf {
  cli_dir
    .map(Path::to_path_buf)
    .or_else(|| config.and_then(|c| c.license_dir.clone()))
    .unwrap_or_else(|| PathBuf::from(DEFAULT_LICENSE_DIR))
}
