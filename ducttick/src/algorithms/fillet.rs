//! Rounded-corner construction for a single polyline vertex.
//!
//! A corner `prev -> current -> next` is replaced by a circular arc tangent
//! to both legs. The arc center sits on the angle bisector, inside the
//! corner, and the arc is walked the short way from the tangent point on
//! the incoming leg to the tangent point on the outgoing leg.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::tolerance::{
    unit_angle, MAX_CENTER_DIST_FACTOR, MAX_TANGENT_DIST_FACTOR, MIN_CORNER_ANGLE,
};
use crate::model::Vec2;

/// Arc points emitted per corner is `FILLET_SEGMENTS + 1`.
pub const FILLET_SEGMENTS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Why a corner could not be rounded. The fitter falls back to a
/// straight-line construction for that corner.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CornerRejection {
    #[error("corner leg has zero length")]
    ZeroLengthLeg,
    #[error("corner angle {angle:.4} rad: legs nearly fold back on each other")]
    NearReversal { angle: f64 },
    #[error("corner angle {angle:.4} rad: legs are nearly collinear")]
    NearStraight { angle: f64 },
    #[error("tangent distance {distance} outside (0, {limit}]")]
    TangentDistance { distance: f64, limit: f64 },
    #[error("center distance {distance} outside (0, {limit}]")]
    CenterDistance { distance: f64, limit: f64 },
    #[error("non-finite corner input")]
    NonFinite,
}

/// Circular arc replacing a corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilletArc {
    pub center: Vec2,
    pub radius: f64,
    /// Tangent point on the incoming leg.
    pub start: Vec2,
    /// Tangent point on the outgoing leg.
    pub end: Vec2,
    /// Unsigned sweep in radians, always below PI.
    pub sweep: f64,
    pub winding: Winding,
}

impl FilletArc {
    pub fn start_angle(&self) -> f64 {
        (self.start - self.center).angle()
    }

    pub fn end_angle(&self) -> f64 {
        (self.end - self.center).angle()
    }

    /// Sweep with the winding applied: negative when clockwise.
    pub fn signed_sweep(&self) -> f64 {
        match self.winding {
            Winding::Clockwise => -self.sweep,
            Winding::CounterClockwise => self.sweep,
        }
    }

    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep
    }

    /// Point at fraction `t` in [0, 1] of the sweep.
    pub fn point_at(&self, t: f64) -> Vec2 {
        let dir = (self.start - self.center)
            .normalized()
            .unwrap_or(Vec2::new(1.0, 0.0));
        self.center + dir.rotated(t * self.signed_sweep()) * self.radius
    }

    /// `segments + 1` points from `start` to `end`.
    pub fn sample(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }
}

/// Guards applied while building a corner arc.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CornerGuards {
    /// Minimum distance of the interior angle from 0 and from PI.
    pub min_angle: f64,
    /// Upper bound on the tangent distance.
    pub max_tangent_dist: f64,
    /// Upper bound on the center distance.
    pub max_center_dist: f64,
}

/// Shared arc construction for fillets and soft chamfers.
pub(crate) fn corner_arc(
    prev: Vec2,
    current: Vec2,
    next: Vec2,
    radius: f64,
    guards: CornerGuards,
) -> Result<FilletArc, CornerRejection> {
    if !(prev.is_finite() && current.is_finite() && next.is_finite() && radius.is_finite()) {
        return Err(CornerRejection::NonFinite);
    }
    let v1 = (prev - current).normalized().ok_or(CornerRejection::ZeroLengthLeg)?;
    let v2 = (next - current).normalized().ok_or(CornerRejection::ZeroLengthLeg)?;

    let angle = unit_angle(v1.dot(v2));
    if angle < guards.min_angle {
        return Err(CornerRejection::NearReversal { angle });
    }
    if angle > std::f64::consts::PI - guards.min_angle {
        return Err(CornerRejection::NearStraight { angle });
    }

    let half = angle * 0.5;
    let dist = radius / half.tan();
    if !(dist > 0.0 && dist <= guards.max_tangent_dist) {
        return Err(CornerRejection::TangentDistance { distance: dist, limit: guards.max_tangent_dist });
    }
    let start = current + v1 * dist;
    let end = current + v2 * dist;

    // v1 and v2 are not opposite here, so the bisector is well defined.
    let bisector = (v1 + v2).normalized().ok_or(CornerRejection::NearStraight { angle })?;
    let center_dist = radius / half.sin();
    if !(center_dist > 0.0 && center_dist <= guards.max_center_dist) {
        return Err(CornerRejection::CenterDistance { distance: center_dist, limit: guards.max_center_dist });
    }
    let center = current + bisector * center_dist;

    let to_start = (start - center).normalized().ok_or(CornerRejection::ZeroLengthLeg)?;
    let to_end = (end - center).normalized().ok_or(CornerRejection::ZeroLengthLeg)?;
    let sweep = unit_angle(to_start.dot(to_end));
    let winding = if to_start.cross(to_end) < 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    };

    Ok(FilletArc { center, radius, start, end, sweep, winding })
}

/// Fillet arc for the corner at `current`, or the reason it was rejected.
pub fn fillet_arc(prev: Vec2, current: Vec2, next: Vec2, radius: f64) -> Result<FilletArc, CornerRejection> {
    corner_arc(
        prev,
        current,
        next,
        radius,
        CornerGuards {
            min_angle: MIN_CORNER_ANGLE,
            max_tangent_dist: radius * MAX_TANGENT_DIST_FACTOR,
            max_center_dist: radius * MAX_CENTER_DIST_FACTOR,
        },
    )
}

/// Sampled fillet with the default segment count; empty when the corner is degenerate.
pub fn fillet_corner(prev: Vec2, current: Vec2, next: Vec2, radius: f64) -> Vec<Vec2> {
    fillet_corner_with(prev, current, next, radius, FILLET_SEGMENTS)
}

pub fn fillet_corner_with(prev: Vec2, current: Vec2, next: Vec2, radius: f64, segments: usize) -> Vec<Vec2> {
    fillet_arc(prev, current, next, radius)
        .map(|arc| arc.sample(segments))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn left_turn_quarter_circle() {
        let arc = fillet_arc(v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), 1.0).unwrap();
        assert!((arc.center.x - 9.0).abs() < 1e-9);
        assert!((arc.center.y - 1.0).abs() < 1e-9);
        assert!((arc.start.x - 9.0).abs() < 1e-9 && arc.start.y.abs() < 1e-9);
        assert!((arc.end.x - 10.0).abs() < 1e-9 && (arc.end.y - 1.0).abs() < 1e-9);
        assert!((arc.sweep - FRAC_PI_2).abs() < 1e-9);
        assert_eq!(arc.winding, Winding::CounterClockwise);
    }

    #[test]
    fn right_turn_winds_clockwise() {
        let arc = fillet_arc(v(0.0, 0.0), v(10.0, 0.0), v(10.0, -10.0), 1.0).unwrap();
        assert!((arc.center.x - 9.0).abs() < 1e-9);
        assert!((arc.center.y + 1.0).abs() < 1e-9);
        assert_eq!(arc.winding, Winding::Clockwise);
        let pts = arc.sample(FILLET_SEGMENTS);
        let last = *pts.last().unwrap();
        assert!((last.x - 10.0).abs() < 1e-9 && (last.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn sampled_points_lie_on_circle() {
        let pts = fillet_corner(v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), 1.0);
        assert_eq!(pts.len(), FILLET_SEGMENTS + 1);
        for p in &pts {
            assert!((p.distance(v(9.0, 1.0)) - 1.0).abs() < 1e-9);
        }
        // bulges toward the original corner
        let mid = pts[FILLET_SEGMENTS / 2];
        assert!(mid.x > 9.0 && mid.y < 1.0);
    }

    #[test]
    fn collinear_corner_rejected() {
        let r = fillet_arc(v(0.0, 0.0), v(5.0, 0.0), v(10.0, 0.0), 1.0);
        assert!(matches!(r, Err(CornerRejection::NearStraight { .. })));
        assert!(fillet_corner(v(0.0, 0.0), v(5.0, 0.0), v(10.0, 0.0), 1.0).is_empty());
    }

    #[test]
    fn spike_rejected() {
        let r = fillet_arc(v(0.0, 0.0), v(5.0, 0.0), v(0.0, 0.01), 1.0);
        assert!(matches!(r, Err(CornerRejection::NearReversal { .. })));
    }

    #[test]
    fn sharp_angle_exceeds_tangent_bound() {
        // 0.3 rad interior: dist = r / tan(0.15) ~ 6.6 r > 5 r
        let a = 0.3f64;
        let r = fillet_arc(v(10.0, 0.0), v(0.0, 0.0), v(10.0 * a.cos(), 10.0 * a.sin()), 1.0);
        assert!(matches!(r, Err(CornerRejection::TangentDistance { .. })));
    }

    #[test]
    fn zero_leg_and_zero_radius_rejected() {
        assert_eq!(
            fillet_arc(v(1.0, 1.0), v(1.0, 1.0), v(2.0, 1.0), 1.0),
            Err(CornerRejection::ZeroLengthLeg)
        );
        assert!(matches!(
            fillet_arc(v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), 0.0),
            Err(CornerRejection::TangentDistance { .. })
        ));
        assert_eq!(
            fillet_arc(v(f64::NAN, 0.0), v(10.0, 0.0), v(10.0, 10.0), 1.0),
            Err(CornerRejection::NonFinite)
        );
    }

    #[test]
    fn angles_match_endpoints() {
        let arc = fillet_arc(v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), 2.0).unwrap();
        assert!((arc.start_angle() + FRAC_PI_2).abs() < 1e-9);
        assert!(arc.end_angle().abs() < 1e-9);
        assert!((arc.arc_length() - 2.0 * FRAC_PI_2).abs() < 1e-9);
    }
}
