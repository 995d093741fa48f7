//! Arc-length parameterisation of point sequences.
//!
//! The free functions walk the sequence directly. [`PathSampler`] keeps the
//! cumulative lengths for the duration of one placement pass and answers the
//! same queries with a binary search.

use crate::config::TangentMode;
use crate::geometry::math::seg_distance_sq;
use crate::geometry::tolerance::{EPS_LEN, TANGENT_PROBE};
use crate::model::Vec2;

/// A sampled position with its (non-normalised) tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub position: Vec2,
    pub tangent: Vec2,
}

impl PathPoint {
    /// Heading of the tangent in radians.
    pub fn angle(&self) -> f64 {
        self.tangent.angle()
    }
}

/// Nearest point on a path to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub point: Vec2,
    /// Arc-length position of `point`.
    pub distance: f64,
    /// Index of the segment `points[segment]..points[segment + 1]`.
    pub segment: usize,
    /// Euclidean distance from the query to `point`.
    pub gap: f64,
}

/// Sum of consecutive distances; zero for fewer than two points.
pub fn path_length(points: &[Vec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

fn clamp_distance(distance: f64, total: f64) -> f64 {
    if distance.is_nan() {
        0.0
    } else {
        distance.clamp(0.0, total)
    }
}

/// Point at arc length `distance`, clamped to the path.
pub fn point_at(points: &[Vec2], distance: f64) -> Vec2 {
    match points {
        [] => Vec2::ZERO,
        [only] => *only,
        _ => {
            let total = path_length(points);
            let d = clamp_distance(distance, total);
            if d >= total {
                return points[points.len() - 1];
            }
            let mut acc = 0.0;
            for w in points.windows(2) {
                let seg = w[0].distance(w[1]);
                if acc + seg >= d {
                    if seg > 0.0 {
                        return w[0].lerp(w[1], (d - acc) / seg);
                    }
                    return w[0];
                }
                acc += seg;
            }
            points[points.len() - 1]
        }
    }
}

/// Central-difference tangent with the default probe. Not normalised and
/// possibly zero; callers decide what to do with a zero tangent.
pub fn tangent_at(points: &[Vec2], distance: f64) -> Vec2 {
    central_difference(points, distance, TANGENT_PROBE)
}

fn central_difference(points: &[Vec2], distance: f64, delta: f64) -> Vec2 {
    point_at(points, distance + delta) - point_at(points, (distance - delta).max(0.0))
}

/// Vector of the segment containing `distance`. At an interior vertex the
/// incoming segment wins; zero-length segments are passed over.
pub fn segment_tangent_at(points: &[Vec2], distance: f64) -> Vec2 {
    let d = clamp_distance(distance, path_length(points));
    let mut acc = 0.0;
    let mut last = Vec2::ZERO;
    for w in points.windows(2) {
        let v = w[1] - w[0];
        let seg = v.length();
        if seg <= EPS_LEN {
            continue;
        }
        if acc + seg >= d {
            return v;
        }
        acc += seg;
        last = v;
    }
    last
}

pub fn closest_point(points: &[Vec2], query: Vec2) -> Option<Projection> {
    PathSampler::new(points).closest_point(query)
}

/// Heading in radians of the segment nearest to `query`.
pub fn direction_at_point(points: &[Vec2], query: Vec2) -> Option<f64> {
    PathSampler::new(points).direction_at_point(query)
}

pub fn split_at(points: &[Vec2], distance: f64) -> (Vec<Vec2>, Vec<Vec2>) {
    PathSampler::new(points).split_at(distance)
}

pub fn cut_between(points: &[Vec2], d1: f64, d2: f64) -> (Vec<Vec2>, Vec<Vec2>) {
    PathSampler::new(points).cut_between(d1, d2)
}

/// Borrowed view with cumulative lengths: `cumulative[i]` is the arc length
/// at `points[i]`.
#[derive(Debug, Clone)]
pub struct PathSampler<'a> {
    points: &'a [Vec2],
    cumulative: Vec<f64>,
}

impl<'a> PathSampler<'a> {
    pub fn new(points: &'a [Vec2]) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                acc += points[i - 1].distance(*p);
            }
            cumulative.push(acc);
        }
        Self { points, cumulative }
    }

    pub fn points(&self) -> &'a [Vec2] {
        self.points
    }

    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Index of the first point at or beyond `d` (already clamped).
    fn upper(&self, d: f64) -> usize {
        self.cumulative.partition_point(|&c| c < d)
    }

    pub fn point_at(&self, distance: f64) -> Vec2 {
        match self.points {
            [] => Vec2::ZERO,
            [only] => *only,
            _ => {
                let total = self.length();
                let d = clamp_distance(distance, total);
                if d >= total {
                    return self.points[self.points.len() - 1];
                }
                let i = self.upper(d);
                if i == 0 {
                    return self.points[0];
                }
                if i >= self.points.len() {
                    return self.points[self.points.len() - 1];
                }
                let a = self.cumulative[i - 1];
                let seg = self.cumulative[i] - a;
                if seg > 0.0 {
                    self.points[i - 1].lerp(self.points[i], (d - a) / seg)
                } else {
                    self.points[i - 1]
                }
            }
        }
    }

    pub fn tangent_at(&self, distance: f64, mode: TangentMode) -> Vec2 {
        match mode {
            TangentMode::CentralDifference { delta } => {
                self.point_at(distance + delta) - self.point_at((distance - delta).max(0.0))
            }
            TangentMode::Segment => self.segment_tangent(distance),
        }
    }

    fn segment_len(&self, end: usize) -> f64 {
        self.cumulative[end] - self.cumulative[end - 1]
    }

    /// Same rule as [`segment_tangent_at`], located by binary search.
    fn segment_tangent(&self, distance: f64) -> Vec2 {
        let n = self.points.len();
        if n < 2 {
            return Vec2::ZERO;
        }
        let d = clamp_distance(distance, self.length());
        let start = self.upper(d).max(1);
        let end = (start..n)
            .find(|&j| self.segment_len(j) > EPS_LEN)
            .or_else(|| (1..start).rev().find(|&j| self.segment_len(j) > EPS_LEN));
        match end {
            Some(j) => self.points[j] - self.points[j - 1],
            None => Vec2::ZERO,
        }
    }

    pub fn sample(&self, distance: f64, mode: TangentMode) -> PathPoint {
        PathPoint {
            position: self.point_at(distance),
            tangent: self.tangent_at(distance, mode),
        }
    }

    pub fn closest_point(&self, query: Vec2) -> Option<Projection> {
        if !query.is_finite() {
            return None;
        }
        let first = *self.points.first()?;
        let mut best: Option<Projection> = None;
        let mut best_d2 = f64::INFINITY;
        for (i, w) in self.points.windows(2).enumerate() {
            let seg = self.cumulative[i + 1] - self.cumulative[i];
            if seg <= EPS_LEN {
                continue;
            }
            let (d2, t) = seg_distance_sq(query, w[0], w[1]);
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(Projection {
                    point: w[0].lerp(w[1], t),
                    distance: self.cumulative[i] + seg * t,
                    segment: i,
                    gap: d2.sqrt(),
                });
            }
        }
        // every segment degenerate: the path is a single location
        Some(best.unwrap_or(Projection {
            point: first,
            distance: 0.0,
            segment: 0,
            gap: first.distance(query),
        }))
    }

    pub fn direction_at_point(&self, query: Vec2) -> Option<f64> {
        if self.points.len() < 2 {
            return None;
        }
        let proj = self.closest_point(query)?;
        let v = self.points[proj.segment + 1] - self.points[proj.segment];
        Some(v.angle())
    }

    /// Split at `distance`; both halves contain the split point.
    pub fn split_at(&self, distance: f64) -> (Vec<Vec2>, Vec<Vec2>) {
        if self.points.is_empty() {
            return (Vec::new(), Vec::new());
        }
        let d = clamp_distance(distance, self.length());
        let p = self.point_at(d);
        let i = self.upper(d).min(self.points.len() - 1);

        let mut before = Vec::with_capacity(i + 1);
        before.extend_from_slice(&self.points[..i]);
        before.push(p);

        // skips every vertex sitting at `d`, zero-length runs included
        let rest = self.cumulative.partition_point(|&c| c <= d);
        let mut after = Vec::with_capacity(self.points.len() - rest + 1);
        after.push(p);
        after.extend_from_slice(&self.points[rest..]);
        (before, after)
    }

    /// Remove the stretch between two distances, given in either order.
    /// A NaN bound yields two empty halves.
    pub fn cut_between(&self, d1: f64, d2: f64) -> (Vec<Vec2>, Vec<Vec2>) {
        if d1.is_nan() || d2.is_nan() {
            return (Vec::new(), Vec::new());
        }
        let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let (before, _) = self.split_at(lo);
        let (_, after) = self.split_at(hi);
        (before, after)
    }
}
