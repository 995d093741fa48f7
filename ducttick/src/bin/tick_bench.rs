use ducttick::{fit, place_ticks, Vec2};
use std::time::Instant;

// Staircase polyline: every vertex is a right-angle corner.
fn build_staircase(vertices: usize, step: f64) -> Vec<Vec2> {
    let mut pts = Vec::with_capacity(vertices);
    let (mut x, mut y) = (0.0, 0.0);
    for i in 0..vertices {
        pts.push(Vec2::new(x, y));
        if i % 2 == 0 { x += step; } else { y += step * 0.75; }
    }
    pts
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut vertices = 2000usize;
    let mut runs = 200usize;
    let mut spacing = 4.0f64;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--vertices=") { if let Ok(v)=val.parse() { vertices=v; } }
        else if let Some(val)=a.strip_prefix("--runs=") { if let Ok(v)=val.parse() { runs=v; } }
        else if let Some(val)=a.strip_prefix("--spacing=") { if let Ok(v)=val.parse() { spacing=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let pts = build_staircase(vertices.max(2), 40.0);
    // Warm-up
    let _ = place_ticks(&fit(&pts, false, 0.1), spacing, 2.0, 8.0);

    let mut times_ms: Vec<f64> = Vec::with_capacity(runs);
    let start_all = Instant::now();
    let mut ticks = 0usize;
    let mut fitted_len = 0usize;
    for _ in 0..runs {
        let t0 = Instant::now();
        let fitted = fit(&pts, false, 0.1);
        let placed = place_ticks(&fitted, spacing, 2.0, 8.0);
        let dt = t0.elapsed().as_secs_f64() * 1000.0;
        fitted_len = fitted.len();
        ticks = placed.len();
        times_ms.push(dt);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("vertices={} fitted={} ticks={} runs={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", vertices, fitted_len, ticks, runs, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
