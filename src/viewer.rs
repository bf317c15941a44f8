//! Standalone window backed by winit.
//!
//! ```no_run
//! # use phyllo::Viewer;
//! Viewer::builder().with_title("spiral").build().run().unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{error::PhylloError, options::Options, FrameDriver};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title (takes precedence over `display.title`).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.display.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the spiral.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::InvalidOptions`] before opening a window if the
    /// options are unusable, [`PhylloError::Viewer`] if the event loop fails,
    /// and the driver's configuration error if the GPU can't be set up.
    pub fn run(self) -> Result<(), PhylloError> {
        self.options.validate()?;

        let event_loop =
            EventLoop::new().map_err(|e| PhylloError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            driver: None,
            clock: Instant::now(),
            options: Some(self.options),
            startup_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PhylloError::Viewer(e.to_string()))?;

        app.startup_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    driver: Option<FrameDriver>,
    clock: Instant,
    options: Option<Options>,
    /// Configuration failure, reported once the event loop has exited.
    startup_error: Option<PhylloError>,
}

impl ViewerApp {
    fn timestamp_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(options) = self.options.take() else {
            return;
        };

        let attrs = Window::default_attributes()
            .with_title(&options.display.title)
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.startup_error = Some(PhylloError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let driver = pollster::block_on(FrameDriver::new(
            window.clone(),
            (inner.width, inner.height),
            window.scale_factor(),
            options,
        ));

        match driver {
            Ok(driver) => {
                window.request_redraw();
                self.window = Some(window);
                self.driver = Some(driver);
            }
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::RedrawRequested => {
                let timestamp = self.timestamp_ms();
                if let (Some(window), Some(driver)) =
                    (&self.window, &mut self.driver)
                {
                    let _ = driver.frame(window.as_ref(), timestamp);
                }
            }

            // Size is polled every frame; a resize only needs a redraw.
            WindowEvent::Resized(_)
            | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }
}
