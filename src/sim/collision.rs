//! Vehicle/bottle overlap resolution
//!
//! Collection is idempotent and unbounded per call: every uncollected
//! bottle overlapping the hull is consumed in the same invocation, and a
//! bottle that is already collected is never counted again.

use super::rect::Rect;
use super::state::Bottle;

/// Mark every uncollected bottle overlapping `hull` as collected.
///
/// Returns the number of bottles consumed by this call.
pub fn collect_overlaps(hull: Rect, bottles: &mut [Bottle]) -> usize {
    let mut consumed = 0;
    for bottle in bottles.iter_mut() {
        if !bottle.collected && hull.intersects(&bottle.rect) && bottle.collect() {
            consumed += 1;
        }
    }
    consumed
}
