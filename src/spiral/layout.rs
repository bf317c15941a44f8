//! Instance index → spiral position (the `vs_main` stage).
//!
//! Points follow a Vogel spiral: each index turns by [`BASE_ANGLE`] and the
//! radius grows with the square root of the index, so equal-area rings hold
//! equal numbers of points.

use glam::{Vec2, Vec4};

use super::{FrameUniforms, BASE_ANGLE, POINT_BUFFER, POINT_RADIUS, SPREAD};

/// Polar coordinates of one spiral point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPoint {
    /// Unwrapped angle in radians (`index · BASE_ANGLE`).
    pub theta: f32,
    /// Normalized radius, `√(index / point_count)`. In `[0, 1]` for indices
    /// below `point_count`.
    pub radius: f32,
}

/// Everything the vertex stage hands to the fragment stage for one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteVertex {
    /// Clip-space position.
    pub position: Vec4,
    /// Spiral angle of the owning point.
    pub theta: f32,
    /// Normalized spiral radius of the owning point.
    pub radius: f32,
    /// Corner offset within the sprite, in `[-1, 1]²`.
    pub point_coord: Vec2,
    /// Sprite radius in device-independent pixels.
    pub point_radius: f32,
}

/// Polar coordinates for `index` with `point_count` as the radial
/// normalization.
///
/// `point_count` must be positive; zero yields NaN or infinity.
#[inline]
#[must_use]
pub fn spiral_point(index: u32, point_count: f32) -> SpiralPoint {
    let idx = index as f32;
    SpiralPoint {
        theta: idx * BASE_ANGLE,
        radius: (idx / point_count).sqrt(),
    }
}

/// Per-axis scale that keeps the spiral circular on a `resolution`-sized
/// target. The longer axis is divided down; the shorter one stays at 1.
#[inline]
#[must_use]
pub fn aspect_scale(resolution: Vec2) -> Vec2 {
    if resolution.y > resolution.x {
        Vec2::new(1.0, resolution.x / resolution.y)
    } else {
        Vec2::new(resolution.y / resolution.x, 1.0)
    }
}

/// Evaluate the vertex stage for one sprite corner of instance `index`.
#[must_use]
pub fn layout_vertex(
    index: u32,
    corner: Vec2,
    uniforms: &FrameUniforms,
) -> SpriteVertex {
    let resolution = Vec2::from(uniforms.resolution);
    let SpiralPoint { theta, radius } =
        spiral_point(index, uniforms.point_count);

    let point_radius = POINT_RADIUS;
    let point_offset = corner / resolution
        * ((point_radius + POINT_BUFFER) * uniforms.pixel_ratio);
    let aspect = aspect_scale(resolution);
    let center = aspect * Vec2::new(theta.cos(), theta.sin()) * radius * SPREAD;

    SpriteVertex {
        position: (center + point_offset).extend(0.0).extend(1.0),
        theta,
        radius,
        point_coord: corner,
        point_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniforms(width: u32, height: u32, point_count: f32) -> FrameUniforms {
        FrameUniforms {
            point_count,
            ..FrameUniforms::new(width, height, 1.0)
        }
    }

    #[test]
    fn first_point_sits_at_origin() {
        let p = spiral_point(0, 100.0);
        assert_eq!(p.theta, 0.0);
        assert_eq!(p.radius, 0.0);
    }

    #[test]
    fn radius_is_monotonic_in_index() {
        for m in [1.0_f32, 7.5, 100.0, 5000.0] {
            let mut prev = 0.0;
            for i in 0..2000 {
                let r = spiral_point(i, m).radius;
                assert!(r >= prev, "r({i}, {m}) = {r} < {prev}");
                prev = r;
            }
        }
    }

    #[test]
    fn radius_reaches_one_at_point_count() {
        assert!((spiral_point(100, 100.0).radius - 1.0).abs() < 1e-6);
        assert!((spiral_point(25, 100.0).radius - 0.5).abs() < 1e-6);
    }

    #[test]
    fn angle_step_is_constant_and_independent_of_point_count() {
        for m in [3.0_f32, 1152.0, 4325.0] {
            let a = spiral_point(1, m).theta;
            let b = spiral_point(2, m).theta;
            assert_eq!(a, BASE_ANGLE);
            assert!((b - a - BASE_ANGLE).abs() < 1e-5);
        }
        assert!((BASE_ANGLE - 10.166_407).abs() < 1e-5);
    }

    #[test]
    fn index_zero_is_pure_sprite_offset() {
        let u = uniforms(800, 600, 100.0);
        let corner = Vec2::new(1.0, -1.0);
        let v = layout_vertex(0, corner, &u);
        let expected = corner / Vec2::new(800.0, 600.0) * (10.5 * 1.0);
        assert_eq!(v.position, Vec4::new(expected.x, expected.y, 0.0, 1.0));
        assert_eq!(v.theta, 0.0);
        assert_eq!(v.radius, 0.0);
        assert_eq!(v.point_coord, corner);
        assert_eq!(v.point_radius, POINT_RADIUS);
    }

    #[test]
    fn landscape_aspect_squeezes_x() {
        assert_eq!(
            aspect_scale(Vec2::new(800.0, 600.0)),
            Vec2::new(0.75, 1.0)
        );
    }

    #[test]
    fn portrait_aspect_squeezes_y() {
        assert_eq!(
            aspect_scale(Vec2::new(600.0, 800.0)),
            Vec2::new(1.0, 0.75)
        );
        assert_eq!(aspect_scale(Vec2::splat(512.0)), Vec2::ONE);
    }

    #[test]
    fn sprite_size_scales_with_pixel_ratio() {
        let mut u = uniforms(1000, 1000, 10.0);
        let a = layout_vertex(3, Vec2::ONE, &u).position;
        u.pixel_ratio = 2.0;
        let b = layout_vertex(3, Vec2::ONE, &u).position;
        let center = layout_vertex(3, Vec2::ZERO, &u).position;
        assert!(((b.x - center.x) - 2.0 * (a.x - center.x)).abs() < 1e-6);
        assert!(((b.x - center.x) - 0.021).abs() < 1e-6);
    }

    #[test]
    fn visible_points_stay_in_clip_space() {
        let u = uniforms(1280, 720, 4325.0);
        for i in 0..4325 {
            let p = layout_vertex(i, Vec2::ZERO, &u).position;
            assert!(p.x.abs() <= 0.9 + 1e-5 && p.y.abs() <= 0.9 + 1e-5);
        }
    }
}
