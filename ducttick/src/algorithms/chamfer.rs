//! Soft chamfer: a corner arc with an absolute radius and a segment count
//! that follows the swept angle.

use crate::algorithms::fillet::{corner_arc, CornerGuards, CornerRejection, FilletArc};
use crate::geometry::tolerance::{CHAMFER_MAX_SEGMENTS, CHAMFER_MIN_SEGMENTS, MIN_CHAMFER_TURN};
use crate::model::Vec2;

/// Arc of radius `softness` at `current`. Turning angles below
/// `MIN_CHAMFER_TURN` (or within it of a full reversal) are rejected, as are
/// arcs whose tangent points would pass the middle of either leg.
pub fn soft_chamfer_arc(prev: Vec2, current: Vec2, next: Vec2, softness: f64) -> Result<FilletArc, CornerRejection> {
    let shorter_leg = prev.distance(current).min(current.distance(next));
    corner_arc(
        prev,
        current,
        next,
        softness,
        CornerGuards {
            // interior = PI - turn, so the turn bounds map onto the same interval
            min_angle: MIN_CHAMFER_TURN,
            max_tangent_dist: shorter_leg * 0.5,
            max_center_dist: f64::MAX,
        },
    )
}

/// One segment per degree of sweep, clamped to the chamfer range.
pub fn chamfer_segments(sweep: f64) -> usize {
    let degrees = sweep.abs().to_degrees();
    if !degrees.is_finite() {
        return CHAMFER_MIN_SEGMENTS;
    }
    (degrees.round() as usize).clamp(CHAMFER_MIN_SEGMENTS, CHAMFER_MAX_SEGMENTS)
}

/// Sampled soft chamfer; empty when the corner is rejected.
pub fn soft_chamfer_corner(prev: Vec2, current: Vec2, next: Vec2, softness: f64) -> Vec<Vec2> {
    soft_chamfer_arc(prev, current, next, softness)
        .map(|arc| arc.sample(chamfer_segments(arc.sweep)))
        .unwrap_or_default()
}
