/// Per-frame uniform record read by both shader stages.
///
/// Must match the WGSL `FrameUniforms` struct layout (16 bytes, no padding).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// Surface size in physical pixels `[width, height]`.
    pub resolution: [f32; 2],
    /// Physical pixels per logical pixel.
    pub pixel_ratio: f32,
    /// Spiral normalization denominator. Always the same value the frame's
    /// instance count was rounded from.
    pub point_count: f32,
}

impl FrameUniforms {
    /// Uniforms for a surface of the given size, with no points yet.
    #[must_use]
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> Self {
        Self {
            resolution: [width as f32, height as f32],
            pixel_ratio: pixel_ratio as f32,
            point_count: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_four_tightly_packed_floats() {
        assert_eq!(size_of::<FrameUniforms>(), 16);
        let u = FrameUniforms::new(800, 600, 2.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&u));
        assert_eq!(floats, &[800.0, 600.0, 2.0, 0.0]);
    }
}
