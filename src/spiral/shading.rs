//! Sprite coloring and coverage (the `fs_main` stage).

use glam::{Vec2, Vec3, Vec4};

use super::{
    SpriteVertex, BORDER_RADIUS, GAMMA, HUE_PHASE_1, HUE_PHASE_2, POINT_BUFFER,
};

/// Clamped linear ramp: 0 at `edge0`, 1 at `edge1`. Reversed edges give a
/// falling ramp.
#[inline]
#[must_use]
pub fn linearstep(edge0: f32, edge1: f32, value: f32) -> f32 {
    ((value - edge0) / (edge1 - edge0)).clamp(0.0, 1.0)
}

/// WGSL `mix`: `a · (1 − t) + b · t`.
#[inline]
fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Rainbow keyed to the spiral angle, three cosines a third of a turn apart.
#[inline]
#[must_use]
pub fn hue(theta: f32) -> Vec3 {
    0.5 + 0.5
        * Vec3::new(
            theta.cos(),
            (theta + HUE_PHASE_1).cos(),
            (theta + HUE_PHASE_2).cos(),
        )
}

/// Anti-aliased disc coverage at distance `local_radius` from the sprite
/// center: 1 inside `point_radius − 0.5`, 0 beyond `point_radius + 0.5`.
#[inline]
#[must_use]
pub fn coverage(local_radius: f32, point_radius: f32) -> f32 {
    linearstep(point_radius + 0.5, point_radius - 0.5, local_radius)
}

/// Premultiplied output color for one fragment of a sprite.
#[must_use]
pub fn shade(v: &SpriteVertex) -> Vec4 {
    // Radius term is multiplied out; kept so the blend reads like the shader.
    let point_color = mix(Vec3::splat(0.5), hue(v.theta), v.radius * 0.0 + 1.0);
    let radius = local_radius(v.point_coord, v.point_radius);
    let border_color = Vec3::ZERO;
    let color = mix(
        point_color,
        border_color,
        linearstep(
            v.point_radius - BORDER_RADIUS - 0.5,
            v.point_radius - BORDER_RADIUS + 0.5,
            radius,
        ),
    );
    let alpha = coverage(radius, v.point_radius);

    color.powf(GAMMA).extend(1.0) * alpha
}

#[inline]
fn local_radius(point_coord: Vec2, point_radius: f32) -> f32 {
    point_coord.length() * (point_radius + POINT_BUFFER)
}
