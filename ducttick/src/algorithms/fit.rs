//! Path fitting: every interior corner of a vertex sequence is replaced by
//! a sampled arc, or by a three-point fallback when no arc fits.

use crate::algorithms::chamfer::{chamfer_segments, soft_chamfer_arc};
use crate::algorithms::fillet::{fillet_arc, CornerRejection, FilletArc};
use crate::config::{CornerStyle, FitOptions};
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::geometry::limits::{in_coord_bounds, MAX_PATH_VERTICES, MAX_SEGMENTS, MIN_SEGMENTS};
use crate::model::{Vec2, VertexPath};

/// How one interior vertex ends up in the fitted path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerFit {
    Arc(FilletArc),
    /// Midpoint of the incoming leg, the vertex, midpoint of the outgoing leg.
    Fallback { before: Vec2, corner: Vec2, after: Vec2, reason: CornerRejection },
    Sharp(Vec2),
}

impl CornerFit {
    pub fn is_arc(&self) -> bool {
        matches!(self, CornerFit::Arc(_))
    }

    fn extend_points(&self, style: CornerStyle, segments: usize, out: &mut Vec<Vec2>) {
        match *self {
            CornerFit::Arc(arc) => {
                let n = match style {
                    CornerStyle::SoftChamfer { .. } => chamfer_segments(arc.sweep),
                    _ => segments,
                };
                out.extend(arc.sample(n));
            }
            CornerFit::Fallback { before, corner, after, .. } => out.extend([before, corner, after]),
            CornerFit::Sharp(p) => out.push(p),
        }
    }
}

fn corner_fit(prev: Vec2, current: Vec2, next: Vec2, opts: &FitOptions) -> CornerFit {
    let arc = match opts.corner {
        CornerStyle::Fillet => {
            let radius = prev.distance(current).min(current.distance(next)) * opts.radius_percent;
            fillet_arc(prev, current, next, radius)
        }
        CornerStyle::SoftChamfer { softness } => soft_chamfer_arc(prev, current, next, softness),
        CornerStyle::Sharp => return CornerFit::Sharp(current),
    };
    match arc {
        Ok(arc) => CornerFit::Arc(arc),
        Err(reason) => CornerFit::Fallback {
            before: prev.midpoint(current),
            corner: current,
            after: current.midpoint(next),
            reason,
        },
    }
}

/// Effective points, or `None` when the input must not be fitted.
fn admit(vertices: &[Vec2], closed: bool, sink: &dyn DiagnosticSink) -> Option<Vec<Vec2>> {
    if vertices.len() < 2 {
        return None;
    }
    if vertices.len() > MAX_PATH_VERTICES {
        sink.report(Diagnostic::TooManyVertices { count: vertices.len(), limit: MAX_PATH_VERTICES });
        return None;
    }
    if let Some(index) = vertices
        .iter()
        .position(|v| !(in_coord_bounds(v.x) && in_coord_bounds(v.y)))
    {
        sink.report(Diagnostic::InvalidVertex { index });
        return None;
    }
    let mut pts = vertices.to_vec();
    if closed && vertices.len() > 2 {
        pts.push(vertices[0]);
    }
    Some(pts)
}

/// Fillet every interior corner with `radius_percent` of the shorter leg.
pub fn fit(vertices: &[Vec2], closed: bool, radius_percent: f64) -> Vec<Vec2> {
    fit_points(vertices, closed, &FitOptions::with_radius_percent(radius_percent), &LogSink)
}

pub fn fit_path(path: &VertexPath, opts: &FitOptions) -> Vec<Vec2> {
    fit_path_with(path, opts, &LogSink)
}

pub fn fit_path_with(path: &VertexPath, opts: &FitOptions, sink: &dyn DiagnosticSink) -> Vec<Vec2> {
    fit_points(&path.vertices, path.closed, opts, sink)
}

fn fit_points(vertices: &[Vec2], closed: bool, opts: &FitOptions, sink: &dyn DiagnosticSink) -> Vec<Vec2> {
    let Some(pts) = admit(vertices, closed, sink) else {
        return Vec::new();
    };
    if pts.len() < 3 || opts.corner == CornerStyle::Sharp {
        return pts;
    }

    let segments = opts.segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
    let mut out = Vec::with_capacity(pts.len() * (segments + 1));
    out.push(pts[0]);
    for i in 1..pts.len() - 1 {
        let fit = corner_fit(pts[i - 1], pts[i], pts[i + 1], opts);
        if let CornerFit::Fallback { reason, .. } = fit {
            sink.report(Diagnostic::CornerFallback { index: i, reason });
        }
        fit.extend_points(opts.corner, segments, &mut out);
    }
    out.push(pts[pts.len() - 1]);
    out
}

/// One record per interior vertex of the effective points, in order.
/// Empty when the path has no interior vertex or is not admissible.
pub fn corner_fits(path: &VertexPath, opts: &FitOptions) -> Vec<CornerFit> {
    let Some(pts) = admit(&path.vertices, path.closed, &LogSink) else {
        return Vec::new();
    };
    pts.windows(3)
        .map(|w| corner_fit(w[0], w[1], w[2], opts))
        .collect()
}
