// Centralized tolerances and guard constants for path geometry

pub const EPS_LEN: f64 = 1e-9;            // zero-length vector / tangent threshold

// Fillet corner guards
pub const MIN_CORNER_ANGLE: f64 = 0.05;   // rad; below = near reversal, above PI - this = near straight
pub const MAX_TANGENT_DIST_FACTOR: f64 = 5.0;
pub const MAX_CENTER_DIST_FACTOR: f64 = 10.0;

// Soft chamfer guards
pub const MIN_CHAMFER_TURN: f64 = 0.1;    // rad, turning angle
pub const CHAMFER_MIN_SEGMENTS: usize = 8;
pub const CHAMFER_MAX_SEGMENTS: usize = 32;

// Central-difference half width for tangent probing
pub const TANGENT_PROBE: f64 = 0.1;

#[inline] pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 { x.max(lo).min(hi) }

/// Angle between two unit vectors with the dot product clamped into acos' domain.
#[inline]
pub fn unit_angle(dot: f64) -> f64 {
    clamp(dot, -1.0, 1.0).acos()
}
