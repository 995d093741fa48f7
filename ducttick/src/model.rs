use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::geometry::tolerance::EPS_LEN;

/// 2D point or vector. Paths are planar; elevation belongs to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, o: Vec2) -> f64 {
        self.x * o.x + self.y * o.y
    }

    /// Z component of the 3D cross product of two in-plane vectors.
    #[inline]
    pub fn cross(self, o: Vec2) -> f64 {
        self.x * o.y - self.y * o.x
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance(self, o: Vec2) -> f64 {
        (o - self).length()
    }

    /// Unit vector, or `None` when the length is below `EPS_LEN`.
    #[inline]
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len.is_finite() && len >= EPS_LEN {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Left-hand perpendicular `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Rotate about the origin by `angle` radians (counter-clockwise positive).
    #[inline]
    pub fn rotated(self, angle: f64) -> Vec2 {
        let (s, c) = angle.sin_cos();
        Vec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    pub fn lerp(self, o: Vec2, t: f64) -> Vec2 {
        Vec2::new(self.x + (o.x - self.x) * t, self.y + (o.y - self.y) * t)
    }

    #[inline]
    pub fn midpoint(self, o: Vec2) -> Vec2 {
        self.lerp(o, 0.5)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Heading in radians, `atan2(y, x)`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, o: Vec2) -> Vec2 {
        Vec2::new(self.x + o.x, self.y + o.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, o: Vec2) {
        self.x += o.x;
        self.y += o.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, o: Vec2) -> Vec2 {
        Vec2::new(self.x - o.x, self.y - o.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

/// Ordered vertices of a host polyline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexPath {
    pub vertices: Vec<Vec2>,
    #[serde(default)]
    pub closed: bool,
}

impl VertexPath {
    pub fn new(vertices: Vec<Vec2>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    pub fn open(vertices: Vec<Vec2>) -> Self {
        Self::new(vertices, false)
    }

    pub fn closed(vertices: Vec<Vec2>) -> Self {
        Self::new(vertices, true)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices with the first one repeated at the end for closed paths of
    /// more than two vertices.
    pub fn effective_points(&self) -> Vec<Vec2> {
        let mut pts = Vec::with_capacity(self.vertices.len() + 1);
        pts.extend_from_slice(&self.vertices);
        if self.closed && self.vertices.len() > 2 {
            pts.push(self.vertices[0]);
        }
        pts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripeKind {
    Red,
    Blue,
}

/// One drawable piece of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StripeSegment {
    pub kind: StripeKind,
    pub start: Vec2,
    pub end: Vec2,
}

impl StripeSegment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// The six points of a tick, ordered along its normal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickEndpoints {
    pub tick_start: Vec2,
    pub red_end1: Vec2,
    pub blue_start: Vec2,
    pub blue_end: Vec2,
    pub red_start2: Vec2,
    pub tick_end: Vec2,
}

/// Red-blue-red marker placed perpendicular to the path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Arc-length position of `center` along the sampled path.
    pub distance: f64,
    pub center: Vec2,
    pub tangent: Vec2,
    pub normal: Vec2,
    pub red1: f64,
    pub blue: f64,
    pub red2: f64,
}

impl Tick {
    pub fn total_length(&self) -> f64 {
        self.red1 + self.blue + self.red2
    }

    pub fn half_total(&self) -> f64 {
        self.total_length() * 0.5
    }

    pub fn endpoints(&self) -> TickEndpoints {
        let half = self.half_total();
        let tick_start = self.center - self.normal * half;
        let red_end1 = self.center - self.normal * (half - self.red1);
        let blue_end = self.center + self.normal * (half - self.red2);
        let tick_end = self.center + self.normal * half;
        TickEndpoints {
            tick_start,
            red_end1,
            blue_start: red_end1,
            blue_end,
            red_start2: blue_end,
            tick_end,
        }
    }

    /// Red, blue, red — in drawing order.
    pub fn segments(&self) -> [StripeSegment; 3] {
        let e = self.endpoints();
        [
            StripeSegment { kind: StripeKind::Red, start: e.tick_start, end: e.red_end1 },
            StripeSegment { kind: StripeKind::Blue, start: e.blue_start, end: e.blue_end },
            StripeSegment { kind: StripeKind::Red, start: e.red_start2, end: e.tick_end },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_rejects_zero() {
        assert!(Vec2::ZERO.normalized().is_none());
        assert!(Vec2::new(1e-12, 0.0).normalized().is_none());
        let n = Vec2::new(3.0, 4.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = Vec2::new(1.0, 0.0).rotated(std::f64::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn closed_path_repeats_first_vertex() {
        let p = VertexPath::closed(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ]);
        let pts = p.effective_points();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[3], pts[0]);

        // two vertices cannot form a loop
        let seg = VertexPath::closed(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert_eq!(seg.effective_points().len(), 2);
    }

    #[test]
    fn asymmetric_stripes_keep_center() {
        let t = Tick {
            distance: 0.0,
            center: Vec2::ZERO,
            tangent: Vec2::new(1.0, 0.0),
            normal: Vec2::new(0.0, 1.0),
            red1: 1.0,
            blue: 4.0,
            red2: 3.0,
        };
        let e = t.endpoints();
        assert!((e.tick_start.y + 4.0).abs() < 1e-12);
        assert!((e.red_end1.y + 3.0).abs() < 1e-12);
        assert!((e.blue_end.y - 1.0).abs() < 1e-12);
        assert!((e.tick_end.y - 4.0).abs() < 1e-12);
    }
}
