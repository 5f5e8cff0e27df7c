use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{DimensaError, Result};
use crate::platform::Platform;
use crate::viewport::Viewport;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub platform: PlatformConfig,
    pub fonts: FontsConfig,
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub target: Platform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontsConfig {
    pub family: String,
}

/// Viewport assumed until the host reports one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    /// Applied when a caller passes no accessibility scale of its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Reject malformed dimensions and sizes instead of passing them through.
    #[serde(default)]
    pub strict: bool,
}

impl ViewportConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl EngineConfig {
    /// Load config: the user file if one exists, otherwise built-in defaults.
    pub fn load() -> Result<Self> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            tracing::debug!("No user config at {}, using defaults", user_path.display());
            Self::from_toml(DEFAULT_CONFIG)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(toml_str).map_err(|e| DimensaError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Save to the user config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| DimensaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "dimensa")
    }

    fn check(&self) -> Result<()> {
        if self.fonts.family.trim().is_empty() {
            return Err(DimensaError::Config("fonts.family must not be empty".into()));
        }
        self.viewport
            .viewport()
            .validate()
            .map_err(|e| DimensaError::Config(format!("viewport: {e}")))?;
        if let Some(scale) = self.accessibility.font_scale {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(DimensaError::Config(format!(
                    "accessibility.font_scale must be positive, got {scale}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
