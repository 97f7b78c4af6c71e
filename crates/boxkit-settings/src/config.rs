//! Job configuration for BoxKit
//!
//! A job bundles everything needed to go from dimensions to a cutting
//! program: the box parameters, the laser settings, and the units lengths
//! are reported in. Jobs are stored as JSON or TOML, chosen by file
//! extension, and validated whenever they are read or written.

use boxkit_camtools::{BoxParameters, LaserSettings};
use boxkit_core::{Error, Result, Units};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name used under the platform config directory.
pub const DEFAULT_CONFIG_FILE: &str = "job.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(Error::config(format!(
                "Config file must be .json or .toml: {}",
                path.display()
            ))),
        }
    }
}

/// A complete cutting job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobConfig {
    /// Units used when reporting lengths
    pub units: Units,
    /// Box dimensions and joinery settings
    #[serde(rename = "box")]
    pub box_params: BoxParameters,
    /// Laser settings for G-code output
    pub laser: LaserSettings,
}

impl JobConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a job from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?,
            Format::Toml => toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded job config");
        Ok(config)
    }

    /// Save a job to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        debug!(path = %path.display(), "saved job config");
        Ok(())
    }

    /// Load `path` if given, else the default config file if it exists,
    /// else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.box_params
            .validate()
            .map_err(|e| Error::config(format!("box: {}", e)))?;
        self.laser
            .validate()
            .map_err(|e| Error::config(format!("laser: {}", e)))?;
        Ok(())
    }
}

/// `<config dir>/boxkit/job.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("boxkit").join(DEFAULT_CONFIG_FILE))
}
