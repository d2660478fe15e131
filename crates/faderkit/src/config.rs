//! Toolkit-wide configuration.
//!
//! Configuration is plain TOML. Every field is optional; missing fields take
//! their defaults.
//!
//! ```toml
//! scroll_delta_amount = 0.05
//! scroll_invert = true
//! theme = "light"
//! ```

use std::path::{Path, PathBuf};

use faderkit_core::logging::targets;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;
use crate::widget::DEFAULT_SCROLL_DELTA_AMOUNT;

/// Errors that can occur while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML was malformed or had the wrong shape.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be turned into TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field parsed but holds an unusable value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Built-in theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// [`Theme::dark`].
    #[default]
    Dark,
    /// [`Theme::light`].
    Light,
}

impl ThemeChoice {
    /// Build the selected theme.
    pub fn theme(self) -> Theme {
        match self {
            Self::Dark => Theme::dark(),
            Self::Light => Theme::light(),
        }
    }
}

/// Defaults applied to every widget added to a [`Ui`](crate::Ui).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Value change per scroll unit and per dragged pixel, unless a widget
    /// sets its own.
    pub scroll_delta_amount: f32,
    /// Flip the scroll direction of every widget.
    pub scroll_invert: bool,
    /// The default theme.
    pub theme: ThemeChoice,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            scroll_delta_amount: DEFAULT_SCROLL_DELTA_AMOUNT,
            scroll_invert: false,
            theme: ThemeChoice::Dark,
        }
    }
}

impl ToolkitConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!(target: targets::CONFIG, path = %path.display(), error = %source, "failed to read config");
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.scroll_delta_amount.is_finite() || self.scroll_delta_amount <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scroll_delta_amount",
                message: format!("must be a positive number, got {}", self.scroll_delta_amount),
            });
        }
        Ok(())
    }
}
