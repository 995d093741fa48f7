use ducttick::algorithms::fillet::FILLET_SEGMENTS;
use ducttick::{
    corner_fits, fillet_arc, fit, fit_path, path_length, CornerFit, CornerStyle, FitOptions, Vec2,
    VertexPath, Winding,
};

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn quarter_circle_corner() {
    let arc = fillet_arc(v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), 1.0).expect("arc");
    assert!(arc.center.distance(v(9.0, 1.0)) < 1e-9);
    assert!(arc.start.distance(v(9.0, 0.0)) < 1e-9);
    assert!(arc.end.distance(v(10.0, 1.0)) < 1e-9);

    // radius 0.1 * min(10, 10) = 1 reproduces the same arc in the fitted path
    let out = fit(&[v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)], false, 0.1);
    assert!(out[1].distance(v(9.0, 0.0)) < 1e-9);
    assert!(out[1 + FILLET_SEGMENTS].distance(v(10.0, 1.0)) < 1e-9);
    for p in &out[1..=1 + FILLET_SEGMENTS] {
        assert!((p.distance(v(9.0, 1.0)) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn open_path_keeps_ends() {
    let pts = [v(0.0, 0.0), v(10.0, 0.0), v(12.0, 7.0), v(3.0, 9.0), v(-4.0, 2.0)];
    let out = fit(&pts, false, 0.1);
    assert_eq!(out.first().copied(), Some(pts[0]));
    assert_eq!(out.last().copied(), Some(pts[4]));
    assert!(out.len() > pts.len());
}

#[test]
fn closed_square_returns_to_start() {
    let square = VertexPath::closed(vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)]);
    let out = fit_path(&square, &FitOptions::default());
    assert_eq!(out.first().copied(), Some(v(0.0, 0.0)));
    assert_eq!(out.last().copied(), Some(v(0.0, 0.0)));
    // three rounded interior corners; the seam at the first vertex stays sharp
    assert_eq!(out.len(), 2 + 3 * (FILLET_SEGMENTS + 1));
    let fits = corner_fits(&square, &FitOptions::default());
    assert_eq!(fits.len(), 3);
    assert!(fits.iter().all(CornerFit::is_arc));
}

#[test]
fn corner_cutting_is_bounded() {
    let pts = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(20.0, 10.0)];
    let raw = path_length(&pts);
    let fitted = path_length(&fit(&pts, false, 0.1));
    assert!(fitted.is_finite());
    assert!(fitted <= raw + 1e-9);
    // each quarter-circle of radius 1 saves 2 - PI/2
    let saved = 2.0 * (2.0 - std::f64::consts::FRAC_PI_2);
    assert!(fitted >= raw - saved - 0.01);
}

#[test]
fn reflex_and_convex_corners_both_short_arcs() {
    // zigzag: left turn then right turn
    let path = VertexPath::open(vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(20.0, 10.0)]);
    let fits = corner_fits(&path, &FitOptions::default());
    let arcs: Vec<_> = fits
        .iter()
        .filter_map(|f| match f {
            CornerFit::Arc(a) => Some(*a),
            _ => None,
        })
        .collect();
    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs[0].winding, Winding::CounterClockwise);
    assert_eq!(arcs[1].winding, Winding::Clockwise);
    for a in &arcs {
        assert!(a.sweep < std::f64::consts::PI);
        assert!((a.sweep - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}

#[test]
fn soft_chamfer_style_adapts_segments() {
    let opts = FitOptions { corner: CornerStyle::SoftChamfer { softness: 2.0 }, ..FitOptions::default() };
    let out = fit_path(&VertexPath::open(vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)]), &opts);
    // 90 degrees clamps to the 32-segment ceiling
    assert_eq!(out.len(), 2 + 33);
    assert!(out[1].distance(v(8.0, 0.0)) < 1e-9);
}

#[test]
fn custom_segment_count() {
    let opts = FitOptions { segments: 4, ..FitOptions::default() };
    let out = fit_path(&VertexPath::open(vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)]), &opts);
    assert_eq!(out.len(), 2 + 5);
}
