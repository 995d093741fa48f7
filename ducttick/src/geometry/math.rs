use crate::model::Vec2;

/// Squared distance from `p` to segment `a`-`b` and the clamped projection parameter.
pub fn seg_distance_sq(p: Vec2, a: Vec2, b: Vec2) -> (f64, f64) {
    let v = b - a;
    let w = p - a;
    let vv = v.length_sq();
    let mut t = if vv > 0.0 { w.dot(v) / vv } else { 0.0 };
    if t < 0.0 { t = 0.0; } else if t > 1.0 { t = 1.0; }
    let proj = a + v * t;
    ((p - proj).length_sq(), t)
}
