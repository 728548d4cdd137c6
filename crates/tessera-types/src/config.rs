//! Layout configuration loaded from TOML.
//!
//! ```toml
//! display_scale = 1.5
//!
//! [scroll]
//! duration = 150.0
//! delta_multiplier = 65.0
//! frame_step = 16.6
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults above.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TesseraError};

/// Tunables for the layout engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Scalar applied to every pixel-kind length (DPI scaling).
    #[serde(default = "default_scale")]
    pub display_scale: f32,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

/// Smooth scrolling constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollConfig {
    /// Length of one smoothing window, in time units.
    #[serde(default = "default_duration")]
    pub duration: f32,
    /// Pixels scrolled per unit of input delta.
    #[serde(default = "default_multiplier")]
    pub delta_multiplier: f32,
    /// Time consumed per frame. Fixed, so smoothing speed follows the
    /// frame rate.
    #[serde(default = "default_frame_step")]
    pub frame_step: f32,
}

fn default_scale() -> f32 {
    1.0
}
fn default_duration() -> f32 {
    150.0
}
fn default_multiplier() -> f32 {
    65.0
}
fn default_frame_step() -> f32 {
    16.6
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            delta_multiplier: default_multiplier(),
            frame_step: default_frame_step(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            display_scale: default_scale(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TesseraError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would make layout or scrolling meaningless.
    pub fn validate(&self) -> Result<()> {
        positive("display_scale", self.display_scale)?;
        positive("scroll.duration", self.scroll.duration)?;
        positive("scroll.frame_step", self.scroll.frame_step)?;
        if !self.scroll.delta_multiplier.is_finite() {
            return Err(TesseraError::Config(
                "scroll.delta_multiplier must be finite".into(),
            ));
        }
        Ok(())
    }
}

fn positive(name: &str, v: f32) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(TesseraError::Config(format!(
            "{name} must be a positive number, got {v}"
        )))
    }
}
