//! Wall-clock time → visible point count.

use crate::options::PulseOptions;

/// Sine oscillator that eases the visible population in and out.
///
/// `N(t) = max_points · (floor + span · (0.5 + 0.5 · sin(t / time_scale)))²`.
/// Squaring the fraction slows the swing near both extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPulse {
    max_points: f64,
    floor: f64,
    span: f64,
    time_scale_ms: f64,
}

impl PointPulse {
    /// Oscillator over `max_points` shaped by `options`.
    #[must_use]
    pub fn new(max_points: u32, options: &PulseOptions) -> Self {
        Self {
            max_points: f64::from(max_points),
            floor: options.floor,
            span: options.span,
            time_scale_ms: options.time_scale_ms,
        }
    }

    /// Fractional point count `elapsed_ms` after the animation started.
    #[must_use]
    pub fn point_count(&self, elapsed_ms: f64) -> f64 {
        let wave = 0.5 + 0.5 * (elapsed_ms / self.time_scale_ms).sin();
        self.max_points * (self.floor + self.span * wave).powi(2)
    }

    /// Smallest count the oscillator produces.
    #[must_use]
    pub fn min_count(&self) -> f64 {
        self.max_points * self.floor.powi(2)
    }

    /// Largest count the oscillator produces.
    #[must_use]
    pub fn max_count(&self) -> f64 {
        self.max_points * (self.floor + self.span).powi(2)
    }

    /// Length of one cycle in milliseconds.
    #[must_use]
    pub fn period_ms(&self) -> f64 {
        std::f64::consts::TAU * self.time_scale_ms
    }
}

/// Instances to draw for a fractional count. Halves round up.
#[must_use]
pub fn instance_count(point_count: f64) -> u32 {
    (point_count + 0.5).floor().max(0.0) as u32
}
