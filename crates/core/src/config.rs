//! Screen configuration.
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! strict_icons = true
//! log_filter = "travelconnect=debug"
//!
//! [viewport]
//! width = 390.0
//! height = 844.0
//! pixel_ratio = 3.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::render::OutlineOptions;
use crate::result::Result;
use crate::style::Viewport;

/// Configuration for rendering the home screen outside the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Device dimensions used to resolve responsive lengths.
    #[serde(default)]
    pub viewport: Viewport,

    /// Treat icons missing from the registry as errors.
    #[serde(default = "default_strict_icons")]
    pub strict_icons: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            strict_icons: default_strict_icons(),
            log_filter: default_log_filter(),
        }
    }
}

impl ScreenConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlParseFailed` on malformed TOML and
    /// `Error::InvalidConfig` when validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::toml_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileReadFailed` if the file cannot be read, otherwise
    /// the errors of [`ScreenConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if any viewport dimension is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<()> {
        let Viewport {
            width,
            height,
            pixel_ratio,
        } = self.viewport;

        [("width", width), ("height", height), ("pixel_ratio", pixel_ratio)]
            .into_iter()
            .try_for_each(|(name, value)| {
                if value.is_finite() && value > 0.0 {
                    Ok(())
                } else {
                    Err(Error::invalid_config(format!(
                        "viewport.{name} must be positive, got {value}"
                    )))
                }
            })
    }

    #[must_use]
    pub const fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            viewport: self.viewport,
            strict_icons: self.strict_icons,
        }
    }
}

const fn default_strict_icons() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}
