//! Device-independent per-frame state.
//!
//! Everything the driver decides each frame (viewport, pixel density,
//! visible count) is computed here without touching the GPU, so the whole
//! frame policy can be exercised in tests.

use super::host::FrameHost;
use crate::animation::{instance_count, PointPulse};
use crate::spiral::FrameUniforms;

/// What one frame draws.
///
/// `instance_count` and `normalization` are always derived from the same
/// fractional count: growing the population both reveals points at the rim
/// and re-spreads the existing ones. Changing one without the other changes
/// the look of the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    /// Sprites issued in the instanced draw (indices `0..instance_count`).
    pub instance_count: u32,
    /// Spiral radial normalization written to the uniform record.
    pub normalization: f32,
}

/// Outcome of the CPU half of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// New surface size when the host's drawable changed since last frame.
    pub resized: Option<(u32, u32)>,
    /// Draw parameters for this frame.
    pub plan: FramePlan,
}

/// Owner of the frame uniform record and the clock that drives it.
#[derive(Debug, Clone)]
pub struct FrameState {
    uniforms: FrameUniforms,
    surface_size: (u32, u32),
    pulse: PointPulse,
    origin_ms: Option<f64>,
}

impl FrameState {
    /// State for a surface of `size` physical pixels.
    #[must_use]
    pub fn new(size: (u32, u32), pixel_ratio: f64, pulse: PointPulse) -> Self {
        let size = clamp_size(size);
        Self {
            uniforms: FrameUniforms::new(size.0, size.1, pixel_ratio),
            surface_size: size,
            pulse,
            origin_ms: None,
        }
    }

    /// The uniform record as it should be uploaded for the current frame.
    #[must_use]
    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    /// Last surface size seen, in physical pixels.
    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    /// Record the surface's current size and pixel density. Returns `true`
    /// when the size changed and the surface needs reconfiguring.
    ///
    /// Zero dimensions (minimized windows, hidden canvases) are clamped to 1
    /// in the uniform record so the shader never divides by zero. They never
    /// count as a resize: the surface keeps its last real size.
    pub fn sync_viewport(
        &mut self,
        size: (u32, u32),
        pixel_ratio: f64,
    ) -> bool {
        self.uniforms.pixel_ratio = pixel_ratio as f32;

        let (width, height) = clamp_size(size);
        self.uniforms.resolution = [width as f32, height as f32];

        if size.0 == 0 || size.1 == 0 || size == self.surface_size {
            return false;
        }
        self.surface_size = size;
        true
    }

    /// Advance to host timestamp `timestamp_ms` and write the frame's point
    /// count into the uniform record. The first call fixes the animation's
    /// start time.
    pub fn advance(&mut self, timestamp_ms: f64) -> FramePlan {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        let point_count = self.pulse.point_count(timestamp_ms - origin);

        let plan = FramePlan {
            instance_count: instance_count(point_count),
            normalization: point_count as f32,
        };
        self.uniforms.point_count = plan.normalization;
        plan
    }

    /// Steps 1 and 2 of every frame: pick up surface changes from `host`,
    /// then advance the pulse. The uniform record is complete afterwards.
    pub fn begin_frame(
        &mut self,
        host: &impl FrameHost,
        timestamp_ms: f64,
    ) -> FrameStep {
        let resized = self
            .sync_viewport(host.surface_size(), host.pixel_ratio())
            .then_some(self.surface_size);
        FrameStep {
            resized,
            plan: self.advance(timestamp_ms),
        }
    }
}

fn clamp_size((width, height): (u32, u32)) -> (u32, u32) {
    (width.max(1), height.max(1))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::engine::host::tests::FakeHost;
    use crate::options::PulseOptions;

    fn state() -> FrameState {
        FrameState::new(
            (800, 600),
            2.0,
            PointPulse::new(5000, &PulseOptions::default()),
        )
    }

    #[test]
    fn new_state_reflects_surface() {
        let s = state();
        assert_eq!(s.uniforms().resolution, [800.0, 600.0]);
        assert_eq!(s.uniforms().pixel_ratio, 2.0);
        assert_eq!(s.surface_size(), (800, 600));
    }

    #[test]
    fn unchanged_size_is_idempotent() {
        let mut s = state();
        let before = *s.uniforms();
        assert!(!s.sync_viewport((800, 600), 2.0));
        assert!(!s.sync_viewport((800, 600), 2.0));
        assert_eq!(*s.uniforms(), before);
    }

    #[test]
    fn resize_updates_resolution_once() {
        let mut s = state();
        assert!(s.sync_viewport((1024, 768), 2.0));
        assert_eq!(s.uniforms().resolution, [1024.0, 768.0]);
        let after = *s.uniforms();
        assert!(!s.sync_viewport((1024, 768), 2.0));
        assert_eq!(*s.uniforms(), after);
    }

    #[test]
    fn zero_size_is_clamped_but_not_a_resize() {
        let mut s = state();
        assert!(!s.sync_viewport((0, 0), 2.0));
        assert_eq!(s.uniforms().resolution, [1.0, 1.0]);
        assert_eq!(s.surface_size(), (800, 600));

        assert!(!s.sync_viewport((0, 480), 2.0));
        assert_eq!(s.uniforms().resolution, [1.0, 480.0]);
    }

    #[test]
    fn restoring_a_minimized_surface_restores_resolution() {
        let mut s = state();
        assert!(!s.sync_viewport((0, 0), 2.0));
        assert!(!s.sync_viewport((800, 600), 2.0));
        assert_eq!(s.uniforms().resolution, [800.0, 600.0]);

        assert!(!s.sync_viewport((0, 0), 2.0));
        assert!(s.sync_viewport((640, 480), 2.0));
        assert_eq!(s.surface_size(), (640, 480));
    }

    #[test]
    fn pixel_ratio_change_is_not_a_resize() {
        let mut s = state();
        assert!(!s.sync_viewport((800, 600), 1.0));
        assert_eq!(s.uniforms().pixel_ratio, 1.0);
    }

    #[test]
    fn first_frame_starts_the_clock() {
        let mut s = state();
        let plan = s.advance(16_000.0);
        assert_eq!(plan.instance_count, 1152);
        assert_eq!(s.uniforms().point_count, 1152.0);

        let crest = s.advance(16_000.0 + 1000.0 * FRAC_PI_2);
        assert_eq!(crest.instance_count, 4325);
        assert!((crest.normalization - 4324.5).abs() < 1e-3);
    }

    #[test]
    fn instance_count_and_normalization_share_one_source() {
        let mut s = state();
        let _ = s.advance(0.0);
        for t in (0..200).map(|i| f64::from(i) * 41.0) {
            let plan = s.advance(t);
            assert_eq!(s.uniforms().point_count, plan.normalization);
            assert!(
                (f64::from(plan.instance_count) - f64::from(plan.normalization))
                    .abs()
                    <= 0.5 + 1e-3
            );
        }
    }

    #[test]
    fn advancing_keeps_viewport() {
        let mut s = state();
        let _ = s.advance(5.0);
        assert_eq!(s.uniforms().resolution, [800.0, 600.0]);
        assert_eq!(s.uniforms().pixel_ratio, 2.0);
    }

    #[test]
    fn begin_frame_reports_resize_once() {
        let mut s = state();
        let host = FakeHost::new((800, 600));

        let step = s.begin_frame(&host, 0.0);
        assert_eq!(step.resized, None);
        assert_eq!(step.plan.instance_count, 1152);
        assert_eq!(s.uniforms().pixel_ratio, 1.0);

        host.size.set((1920, 1080));
        let step = s.begin_frame(&host, 16.0);
        assert_eq!(step.resized, Some((1920, 1080)));
        assert_eq!(s.uniforms().resolution, [1920.0, 1080.0]);

        let step = s.begin_frame(&host, 32.0);
        assert_eq!(step.resized, None);
    }

    #[test]
    fn minimized_host_never_reports_a_resize() {
        let mut s = state();
        let host = FakeHost::new((0, 0));
        let step = s.begin_frame(&host, 0.0);
        assert_eq!(step.resized, None);
        assert_eq!(s.uniforms().resolution, [1.0, 1.0]);
    }
}
