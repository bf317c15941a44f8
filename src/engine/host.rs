//! The host side of the frame loop.

/// What the driver needs from whatever owns the window or canvas.
///
/// The host decides when frames happen; the driver only asks for the next
/// one at the end of each frame.
pub trait FrameHost {
    /// Current drawable size in physical pixels.
    fn surface_size(&self) -> (u32, u32);

    /// Physical pixels per logical pixel.
    fn pixel_ratio(&self) -> f64;

    /// Schedule another frame callback.
    fn request_frame(&self);
}

#[cfg(feature = "viewer")]
impl FrameHost for winit::window::Window {
    fn surface_size(&self) -> (u32, u32) {
        let size = self.inner_size();
        (size.width, size.height)
    }

    fn pixel_ratio(&self) -> f64 {
        self.scale_factor()
    }

    fn request_frame(&self) {
        self.request_redraw();
    }
}
