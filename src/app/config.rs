//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Camera frame settings
    #[serde(default)]
    pub camera: CameraConfig,
    /// Screen geometry
    #[serde(default)]
    pub screen: ScreenConfig,
    /// External detector process
    #[serde(default)]
    pub detector: DetectorConfig,
    /// Gesture classification settings
    #[serde(default)]
    pub gesture: GestureConfig,
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

/// Screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Screen width in pixels
    pub width: u32,
    /// Screen height in pixels
    pub height: u32,
}

/// External detector configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectorConfig {
    /// Command to spawn; its stdout must emit one frame per line as JSON.
    /// `None` means frames are read from stdin.
    pub command: Option<String>,
    /// Arguments for the detector command
    #[serde(default)]
    pub args: Vec<String>,
}

/// Gesture configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GestureConfig {
    /// Log per-hand classification results at debug level
    #[serde(default)]
    pub log_classification: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(crate::Error::Config(format!(
                "camera dimensions must be non-zero, got {}x{}",
                self.camera.width, self.camera.height
            )));
        }
        // Clamping targets the open interval (0, dim), which needs dim >= 2
        if self.screen.width < 2 || self.screen.height < 2 {
            return Err(crate::Error::Config(format!(
                "screen dimensions must be at least 2x2, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if let Some(command) = &self.detector.command {
            if command.trim().is_empty() {
                return Err(crate::Error::Config(
                    "detector command must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".airmouse").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
