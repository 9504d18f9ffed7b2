//! Collectible bottle spawning
//!
//! Spawning is a pure function of the RNG stream: the same seed and call
//! sequence always produce bit-identical positions. Positions are uniform
//! over the margin-inset play area with no minimum-spacing guarantee, so
//! overlapping bottles are permitted.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::state::Bottle;

/// Spawn `count` bottles uniformly inside `bounds` inset by `margin`
pub fn spawn_bottles(count: usize, bounds: Rect, margin: f32, rng: &mut impl Rng) -> Vec<Bottle> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(bounds.min.x + margin..=bounds.max.x - margin);
            let y = rng.random_range(bounds.min.y + margin..=bounds.max.y - margin);
            Bottle::new(Vec2::new(x, y))
        })
        .collect()
}
