use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape of the visible-count oscillation.
///
/// The visible fraction swings between `floor` and `floor + span`, and the
/// count is `max_points` times that fraction squared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pulse", inline)]
#[serde(default)]
pub struct PulseOptions {
    /// Lowest visible fraction (before squaring).
    #[schemars(title = "Floor", range(min = 0.0, max = 1.0))]
    pub floor: f64,
    /// Swing added on top of `floor` at the crest.
    #[schemars(title = "Span", range(min = 0.0, max = 1.0))]
    pub span: f64,
    /// Milliseconds per radian of oscillator phase. One full cycle takes
    /// `2π · time_scale_ms`.
    #[schemars(title = "Time Scale (ms)", range(min = 1.0, max = 100_000.0))]
    pub time_scale_ms: f64,
}

impl Default for PulseOptions {
    fn default() -> Self {
        Self {
            floor: 0.03,
            span: 0.9,
            time_scale_ms: 1000.0,
        }
    }
}

impl PulseOptions {
    /// Options whose full cycle lasts `period_ms` milliseconds.
    #[must_use]
    pub fn with_period_ms(period_ms: f64) -> Self {
        Self {
            time_scale_ms: period_ms / std::f64::consts::TAU,
            ..Self::default()
        }
    }

    /// Length of one full cycle in milliseconds.
    #[must_use]
    pub fn period_ms(&self) -> f64 {
        std::f64::consts::TAU * self.time_scale_ms
    }
}
