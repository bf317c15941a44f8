//! The frame driver: owns the GPU state and runs one frame per host
//! callback.

mod frame_state;
mod host;

pub use frame_state::{FramePlan, FrameState, FrameStep};
pub use host::FrameHost;
use web_time::Duration;

use crate::animation::PointPulse;
use crate::error::PhylloError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::options::Options;
use crate::renderer::SpiralRenderer;
use crate::util::frame_timing::FrameTiming;

/// How often the smoothed frame rate is logged.
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Renders the animated spiral into a surface.
///
/// # Lifecycle
///
/// [`FrameDriver::new`] is the configuring step: it validates the options,
/// acquires the device and surface, builds the pipeline and uploads the
/// sprite geometry. Any failure there is returned and nothing is retried.
/// Afterwards the driver is running: the host calls
/// [`frame`](Self::frame) once per display refresh and the driver asks the
/// host for the next refresh when it is done.
///
/// # Frame loop
///
/// Each frame picks up surface-size changes, derives the visible point
/// count from elapsed time, uploads the uniform record, issues one instanced
/// draw and presents.
pub struct FrameDriver {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    renderer: SpiralRenderer,
    state: FrameState,
    options: Options,
    /// Per-frame timing and FPS tracking.
    pub(crate) frame_timing: FrameTiming,
}

impl FrameDriver {
    /// Configure a driver that presents into `target`.
    ///
    /// `size` is the drawable size in physical pixels and `pixel_ratio` the
    /// host's physical-per-logical pixel scale.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::InvalidOptions`] for unusable options,
    /// [`PhylloError::Gpu`] when no device or surface can be acquired, and
    /// [`PhylloError::Shader`] if the pipeline's shader fails to compose.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        pixel_ratio: f64,
        options: Options,
    ) -> Result<Self, PhylloError> {
        options.validate()?;

        let context = RenderContext::new(
            target,
            size,
            options.display.present_mode(),
        )
        .await?;

        let pulse = PointPulse::new(options.spiral.max_points, &options.pulse);
        let state = FrameState::new(context.size(), pixel_ratio, pulse);

        let mut shader_composer = ShaderComposer::new()?;
        let renderer =
            SpiralRenderer::new(&context, &mut shader_composer, state.uniforms())?;

        log::info!(
            "spiral ready: up to {} points, {:.0} ms pulse period",
            options.spiral.max_points,
            pulse.period_ms()
        );

        Ok(Self {
            context,
            renderer,
            state,
            options,
            frame_timing: FrameTiming::new(FPS_REPORT_INTERVAL),
        })
    }

    /// The options the driver was configured with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// CPU-side frame state (uniform record, last surface size).
    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// Run one frame at host timestamp `timestamp_ms`, then ask `host` for
    /// the next one.
    ///
    /// Returns the draw that was issued, or `None` if no frame could be
    /// presented this time.
    pub fn frame(
        &mut self,
        host: &impl FrameHost,
        timestamp_ms: f64,
    ) -> Option<FramePlan> {
        let step = self.state.begin_frame(host, timestamp_ms);
        if let Some((width, height)) = step.resized {
            log::debug!("surface resized to {width}x{height}");
            self.context.resize(width, height);
        }

        let result = self.present(step.plan);
        if let Some(fps) = self.frame_timing.end_frame() {
            log::debug!(
                "{fps:.1} fps, {} points",
                step.plan.instance_count
            );
        }

        match finish_frame(host, step.plan, result) {
            FrameOutcome::Presented(plan) => Some(plan),
            FrameOutcome::Reconfigure => {
                self.context.reconfigure();
                None
            }
            FrameOutcome::Dropped => None,
        }
    }

    /// Upload the uniform record, draw `plan` and present.
    fn present(&self, plan: FramePlan) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .write_uniforms(&self.context.queue, self.state.uniforms());

        let mut encoder = self.context.create_encoder();
        self.renderer.render(
            &mut encoder,
            &view,
            self.options.display.clear(),
            plan.instance_count,
        );
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}

/// What became of a frame once the surface had its say.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FrameOutcome {
    /// The draw reached the screen.
    Presented(FramePlan),
    /// The surface is lost or outdated and must be configured again.
    Reconfigure,
    /// Nothing was shown this frame.
    Dropped,
}

/// Classify the surface result and schedule the next frame. The loop keeps
/// going whatever the surface reported.
fn finish_frame(
    host: &impl FrameHost,
    plan: FramePlan,
    result: Result<(), wgpu::SurfaceError>,
) -> FrameOutcome {
    let outcome = match result {
        Ok(()) => FrameOutcome::Presented(plan),
        Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
            log::debug!("surface lost or outdated, reconfiguring");
            FrameOutcome::Reconfigure
        }
        Err(e) => {
            log::error!("render error: {e:?}");
            FrameOutcome::Dropped
        }
    };
    host.request_frame();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::host::tests::FakeHost;

    const PLAN: FramePlan = FramePlan {
        instance_count: 1152,
        normalization: 1152.0,
    };

    #[test]
    fn presented_frame_requests_the_next() {
        let host = FakeHost::new((800, 600));
        let outcome = finish_frame(&host, PLAN, Ok(()));
        assert_eq!(outcome, FrameOutcome::Presented(PLAN));
        assert_eq!(host.requests.get(), 1);
    }

    #[test]
    fn lost_and_outdated_surfaces_reconfigure_and_continue() {
        for error in [wgpu::SurfaceError::Lost, wgpu::SurfaceError::Outdated] {
            let host = FakeHost::new((800, 600));
            let outcome = finish_frame(&host, PLAN, Err(error));
            assert_eq!(outcome, FrameOutcome::Reconfigure);
            assert_eq!(host.requests.get(), 1);
        }
    }

    #[test]
    fn other_surface_errors_drop_the_frame_and_continue() {
        for error in [
            wgpu::SurfaceError::Timeout,
            wgpu::SurfaceError::OutOfMemory,
            wgpu::SurfaceError::Other,
        ] {
            let host = FakeHost::new((800, 600));
            let outcome = finish_frame(&host, PLAN, Err(error));
            assert_eq!(outcome, FrameOutcome::Dropped);
            assert_eq!(host.requests.get(), 1);
        }
    }

    #[test]
    fn every_frame_requests_exactly_one_more() {
        let host = FakeHost::new((800, 600));
        let _ = finish_frame(&host, PLAN, Ok(()));
        let _ = finish_frame(&host, PLAN, Err(wgpu::SurfaceError::Lost));
        let _ = finish_frame(&host, PLAN, Err(wgpu::SurfaceError::Timeout));
        assert_eq!(host.requests.get(), 3);
    }
}
