//! Configuration management for the jewelry try-on pipeline

use crate::assets::ReloadPolicy;
use crate::constants::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, SMOOTHING_WINDOW};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overlay surface configuration
    pub surface: SurfaceConfig,

    /// Anchor smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Accessory asset configuration
    pub assets: AssetConfig,
}

/// Overlay surface dimensions, matching the camera capture resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    pub width: u32,

    /// Surface height in pixels
    pub height: u32,
}

/// Anchor smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Moving average window size per anchor
    pub window: usize,
}

/// Accessory asset parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Root directory holding the per-category catalog directories
    pub root: PathBuf,

    /// How out-of-order reload completions are resolved
    pub reload_policy: ReloadPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            smoothing: SmoothingConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window: SMOOTHING_WINDOW,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            reload_policy: ReloadPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration.
    ///
    /// Asset paths are deliberately not checked here: a missing or broken
    /// asset degrades to the category not appearing, it is not a startup
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if any numeric parameter is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(Error::ConfigError(
                "Surface dimensions must be greater than 0".to_string(),
            ));
        }

        if self.smoothing.window == 0 {
            return Err(Error::ConfigError(
                "Smoothing window size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Jewelry Try-On Configuration

# Overlay surface, sized to the camera capture resolution
surface:
  width: 1280
  height: 720

# Anchor smoothing
smoothing:
  window: 5

# Accessory assets
assets:
  root: "assets"
  # last_resolved applies reload completions in arrival order;
  # last_requested discards completions superseded by a newer request
  reload_policy: "last_resolved"
"#;
