//! Pairwise circle collision
//!
//! All-pairs scan, O(n²). Overlapping circles are sent directly away from
//! each other; speeds are untouched and nothing pushes them apart, so a pair
//! can stay overlapped for a few frames while they separate.

use glam::Vec2;

use super::circle::Circle;

/// Unit vector pointing from `other` toward `this`
///
/// Coincident centers have no defined direction; `Vec2::X` is used so the
/// pair still separates.
#[inline]
pub fn repulsion_direction(this: Vec2, other: Vec2) -> Vec2 {
    (this - other).try_normalize().unwrap_or(Vec2::X)
}

/// Redirect every overlapping pair away from each other
///
/// Pairs are visited in ascending `(i, j)` order with `i < j`; a circle in
/// several overlaps keeps the direction from the last pair that touched it.
/// Positions are only read, so the scan order does not affect which pairs
/// overlap. Returns the number of overlapping pairs.
pub fn resolve_collisions(circles: &mut [Circle]) -> usize {
    let mut hits = 0;
    for i in 0..circles.len() {
        for j in (i + 1)..circles.len() {
            if circles[i].overlaps(&circles[j]) {
                let away = repulsion_direction(circles[i].pos, circles[j].pos);
                circles[i].dir = away;
                circles[j].dir = -away;
                hits += 1;
            }
        }
    }
    hits
}
