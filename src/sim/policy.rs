//! Wall reflection and pointer highlight rules
//!
//! Both are pure functions so they can be checked without a circle or a
//! window. `Circle::update` applies them in order: highlight, reflect, move.

use glam::Vec2;

/// Whether the pointer's hit area touches a circle
///
/// Recomputed every frame; there is no hysteresis.
#[inline]
pub fn is_highlighted(pos: Vec2, radius: f32, mouse: Vec2, mouse_radius: f32) -> bool {
    pos.distance(mouse) <= radius + mouse_radius
}

/// Reflect off the window edges
///
/// For each axis whose edge has crossed or touched a wall, the position is
/// snapped back inside and that axis of the direction is inverted. Returns the
/// corrected `(position, direction)`.
pub fn reflect_walls(pos: Vec2, dir: Vec2, radius: f32, bounds: Vec2) -> (Vec2, Vec2) {
    let (x, dx) = reflect_axis(pos.x, dir.x, radius, bounds.x);
    let (y, dy) = reflect_axis(pos.y, dir.y, radius, bounds.y);
    (Vec2::new(x, y), Vec2::new(dx, dy))
}

fn reflect_axis(p: f32, d: f32, radius: f32, limit: f32) -> (f32, f32) {
    if limit <= 2.0 * radius {
        // Window narrower than the circle: touching both walls
        return (limit * 0.5, -d);
    }
    if p - radius <= 0.0 {
        (radius, -d)
    } else if p + radius >= limit {
        (limit - radius, -d)
    } else {
        (p, d)
    }
}

/// Clamp a position so the whole circle stays inside the window
pub fn contain(pos: Vec2, radius: f32, bounds: Vec2) -> Vec2 {
    Vec2::new(
        contain_axis(pos.x, radius, bounds.x),
        contain_axis(pos.y, radius, bounds.y),
    )
}

#[inline]
fn contain_axis(p: f32, radius: f32, limit: f32) -> f32 {
    if limit <= 2.0 * radius {
        limit * 0.5
    } else {
        p.clamp(radius, limit - radius)
    }
}
