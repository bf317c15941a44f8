//! Runtime options with TOML file support.
//!
//! Spiral population, pulse shape and display settings live here. Options
//! serialize to/from TOML; every section uses `#[serde(default)]` so a file
//! that only overrides `[pulse]` is valid.

mod display;
mod pulse;
mod spiral;

use std::path::Path;

pub use display::DisplayOptions;
pub use pulse::PulseOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use spiral::SpiralOptions;

use crate::error::PhylloError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Spiral population.
    pub spiral: SpiralOptions,
    /// Visible-count oscillator.
    pub pulse: PulseOptions,
    /// Window and presentation settings.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the tweakable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::Io`] if the file can't be read and
    /// [`PhylloError::OptionsParse`] if it isn't valid TOML for [`Options`].
    pub fn load(path: &Path) -> Result<Self, PhylloError> {
        let content = std::fs::read_to_string(path).map_err(PhylloError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, PhylloError> {
        toml::from_str(content)
            .map_err(|e| PhylloError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), PhylloError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PhylloError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PhylloError::Io)?;
        }
        std::fs::write(path, content).map_err(PhylloError::Io)
    }

    /// Reject values the spiral shader can't handle. Called before any GPU
    /// work so a bad file fails at startup instead of dividing by zero
    /// every frame.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::InvalidOptions`] describing the first bad
    /// field.
    pub fn validate(&self) -> Result<(), PhylloError> {
        if self.spiral.max_points == 0 {
            return Err(PhylloError::InvalidOptions(
                "spiral.max_points must be greater than zero".into(),
            ));
        }
        let PulseOptions {
            floor,
            span,
            time_scale_ms,
        } = self.pulse;
        if !(time_scale_ms.is_finite() && time_scale_ms > 0.0) {
            return Err(PhylloError::InvalidOptions(format!(
                "pulse.time_scale_ms must be positive, got {time_scale_ms}"
            )));
        }
        if !(floor > 0.0 && span >= 0.0 && floor + span <= 1.0) {
            return Err(PhylloError::InvalidOptions(format!(
                "pulse bounds must satisfy 0 < floor and floor + span <= 1, \
                 got floor = {floor}, span = {span}"
            )));
        }
        Ok(())
    }
}
