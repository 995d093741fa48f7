use ducttick::config::TangentMode;
use ducttick::{point_at, tangent_at, PathSampler, Vec2};

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn endpoints_are_exact() {
    let p = [v(1.0, 1.0), v(4.0, 5.0), v(4.0, 9.0), v(-2.0, 9.0)];
    let s = PathSampler::new(&p);
    assert_eq!(s.point_at(0.0), p[0]);
    assert_eq!(s.point_at(s.length()), p[3]);
    assert_eq!(point_at(&p, s.length()), p[3]);
    assert!((s.length() - 15.0).abs() < 1e-12);
}

#[test]
fn progress_is_monotone_on_a_straight_line() {
    let p = [v(0.0, 0.0), v(3.0, 0.0), v(3.0, 0.0), v(7.0, 0.0)];
    let mut last = -1.0;
    for k in 0..=70 {
        let x = point_at(&p, k as f64 * 0.1).x;
        assert!(x >= last);
        last = x;
    }
}

#[test]
fn zero_length_segment_tangent_is_finite() {
    let p = [v(0.0, 0.0), v(5.0, 0.0), v(5.0, 0.0), v(10.0, 0.0)];
    for d in [0.0, 4.95, 5.0, 5.05, 10.0] {
        let t = tangent_at(&p, d);
        assert!(t.is_finite());
        assert!(t.length() > 0.0);
        assert!(t.y.abs() < 1e-12);
    }
}

#[test]
fn sample_modes_agree_on_straight_stretch() {
    let p = [v(0.0, 0.0), v(0.0, 10.0)];
    let s = PathSampler::new(&p);
    let a = s.sample(5.0, TangentMode::default());
    let b = s.sample(5.0, TangentMode::Segment);
    assert_eq!(a.position, b.position);
    let (na, nb) = (a.tangent.normalized().unwrap(), b.tangent.normalized().unwrap());
    assert!(na.distance(nb) < 1e-12);
}

#[test]
fn break_geometry_keeps_both_sides() {
    let p = [v(0.0, 0.0), v(20.0, 0.0)];
    let s = PathSampler::new(&p);
    let a = s.closest_point(v(6.0, 3.0)).unwrap();
    let b = s.closest_point(v(14.0, -2.0)).unwrap();
    let (left, right) = s.cut_between(a.distance, b.distance);
    assert_eq!(left.len(), 2);
    assert_eq!(right.len(), 2);
    assert!(left[1].distance(v(6.0, 0.0)) < 1e-9);
    assert!(right[0].distance(v(14.0, 0.0)) < 1e-9);
    assert_eq!(right[1], v(20.0, 0.0));
}
