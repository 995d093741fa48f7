// Centralized ingestion limits to harden against hostile or runaway input

// Path sizes
pub const MAX_PATH_VERTICES: usize = 100_000;
pub const MAX_TICKS: usize = 1_000_000;

// Arc sampling
pub const MIN_SEGMENTS: usize = 1;
pub const MAX_SEGMENTS: usize = 1_024;

// Numeric bounds
pub const COORD_MIN: f64 = -1.0e9;
pub const COORD_MAX: f64 =  1.0e9;
pub const WIDTH_MAX: f64 = 10_000.0;
pub const SPACING_MIN: f64 = 1.0e-6;
pub const RADIUS_PERCENT_MAX: f64 = 0.5;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_width_bounds(w: f64) -> bool { w.is_finite() && w > 0.0 && w <= WIDTH_MAX }

#[inline]
pub fn in_stripe_bounds(len: f64) -> bool { len.is_finite() && len >= 0.0 && len <= WIDTH_MAX }

#[inline]
pub fn in_spacing_bounds(s: f64) -> bool { s.is_finite() && s >= SPACING_MIN }

#[inline]
pub fn in_segment_bounds(n: usize) -> bool { (MIN_SEGMENTS..=MAX_SEGMENTS).contains(&n) }
