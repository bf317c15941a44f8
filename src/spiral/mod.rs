//! CPU mirror of the spiral shader.
//!
//! [`layout`] and [`shading`] evaluate the same formulas as
//! `assets/shaders/spiral.wgsl`, in the same order and at the same `f32`
//! precision, so the GPU output can be reasoned about (and tested) without a
//! device. Constants that WGSL folds at abstract-float precision are folded
//! here in `f64` and narrowed once, which is what naga does too.

use std::f64::consts::PI;

pub mod layout;
pub mod shading;
mod uniforms;

pub use layout::{aspect_scale, layout_vertex, spiral_point, SpiralPoint, SpriteVertex};
pub use shading::{coverage, hue, linearstep, shade};
pub use uniforms::FrameUniforms;

const SQRT_5: f64 = 2.236_067_977_499_79;

/// Angular step between consecutive points: π · (1 + √5).
pub const BASE_ANGLE: f32 = (PI * (1.0 + SQRT_5)) as f32;

/// On-screen sprite radius in device-independent pixels.
pub const POINT_RADIUS: f32 = 10.0;

/// Extra half pixel around each sprite so the anti-aliased edge isn't
/// clipped by the quad.
pub const POINT_BUFFER: f32 = 0.5;

/// Width of the dark rim drawn inside each sprite.
pub const BORDER_RADIUS: f32 = 2.0;

/// Fraction of the half-extent of clip space covered by the outermost point.
pub const SPREAD: f32 = 0.9;

/// Output gamma exponent (~1/2.2).
pub const GAMMA: f32 = 0.454;

/// Sprite quad corners in triangle-strip order.
pub const SPRITE_CORNERS: [[f32; 2]; 4] =
    [[1.0, -1.0], [1.0, 1.0], [-1.0, -1.0], [-1.0, 1.0]];

pub(crate) const HUE_PHASE_1: f32 = (2.0 * PI / 3.0) as f32;
pub(crate) const HUE_PHASE_2: f32 = (4.0 * PI / 3.0) as f32;
