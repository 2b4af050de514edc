//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treevis/treevis.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TREEVIS_*` prefix
//!
//! `NO_COLOR` (any value) forces plain output on top of all layers.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, IoResultExt};
use crate::domain::Style;

/// Unified configuration for treevis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Suppress ANSI colors entirely
    pub plain: bool,
    /// Color code (0-255) for nodes that carry none of their own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub plain: Option<bool>,
    pub color: Option<i64>,
}

/// Get the XDG config directory for treevis.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treevis").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treevis.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Output style implied by these settings.
    pub fn style(&self) -> Style {
        if self.plain {
            Style::Plain
        } else {
            Style::Colored
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            plain: overlay.plain.unwrap_or(self.plain),
            color: overlay.color.or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("Loading config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;

        if std::env::var_os("NO_COLOR").is_some() {
            current.plain = true;
        }

        current.validate()?;
        Ok(current)
    }

    /// Apply TREEVIS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TREEVIS"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("plain") {
            settings.plain = val;
        }
        if let Ok(val) = config.get_int("color") {
            settings.color = Some(val);
        }

        Ok(settings)
    }

    /// Reject a default color outside the 256-color palette.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        match self.color {
            Some(code) if !(0..=255).contains(&code) => Err(ApplicationError::Config {
                message: format!("color must be in range 0 - 255, got {}", code),
            }),
            _ => Ok(()),
        }
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_overlay_when_merged_then_specified_fields_win() {
        let base = Settings {
            plain: true,
            color: Some(3),
        };
        let merged = base.merge_with(&RawSettings {
            plain: None,
            color: Some(200),
        });
        assert_eq!(
            merged,
            Settings {
                plain: true,
                color: Some(200)
            }
        );
    }

    #[test]
    fn given_out_of_range_color_when_validate_then_errors() {
        let settings = Settings {
            plain: false,
            color: Some(300),
        };
        assert!(matches!(
            settings.validate(),
            Err(ApplicationError::Config { .. })
        ));
    }
}
