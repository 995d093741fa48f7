pub mod config;
pub mod diagnostics;
pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod chamfer;
    pub mod fillet;
    pub mod fit;
    pub mod sampler;
    pub mod ticks;
}

pub use algorithms::fillet::{fillet_arc, fillet_corner, CornerRejection, FilletArc, Winding, FILLET_SEGMENTS};
pub use algorithms::fit::{corner_fits, fit, fit_path, fit_path_with, CornerFit};
pub use algorithms::sampler::{
    closest_point, cut_between, direction_at_point, path_length, point_at, split_at, tangent_at, PathPoint,
    PathSampler, Projection,
};
pub use algorithms::ticks::{place_ticks, place_ticks_with, tick_plan, tick_segments, TickParams, TickPlan};
pub use config::{ConfigError, CornerStyle, DuctStyle, FitOptions, KernelConfig, TangentMode};
pub use diagnostics::{Collector, Diagnostic, DiagnosticSink, LogSink, Silent};
pub use model::{StripeKind, StripeSegment, Tick, TickEndpoints, Vec2, VertexPath};

/// The three path operations a renderer needs.
pub trait DuctGeometry {
    /// Fitted point sequence with rounded corners.
    fn fit(&self, path: &VertexPath) -> Vec<Vec2>;
    /// Position and tangent at an arc-length distance.
    fn sample(&self, points: &[Vec2], distance: f64) -> PathPoint;
    /// Ticks along `points` with a blue stripe of `width`.
    fn place_ticks(&self, points: &[Vec2], width: f64) -> Vec<Tick>;
}

/// Configured kernel. Stateless apart from its settings, so one value can
/// serve any number of paths and threads.
#[derive(Clone, Debug, Default)]
pub struct DuctKernel<S = LogSink> {
    config: KernelConfig,
    sink: S,
}

impl DuctKernel<LogSink> {
    pub fn new(config: KernelConfig) -> Self {
        Self { config, sink: LogSink }
    }
}

impl<S: DiagnosticSink> DuctKernel<S> {
    pub fn with_sink(config: KernelConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tick_params(&self, width: f64) -> TickParams {
        let style = &self.config.style;
        TickParams {
            spacing: style.tick_spacing,
            red_length: style.red_length,
            blue_length: width,
            tangent: style.tangent,
        }
    }
}

impl<S: DiagnosticSink> DuctGeometry for DuctKernel<S> {
    fn fit(&self, path: &VertexPath) -> Vec<Vec2> {
        fit_path_with(path, &self.config.fit, &self.sink)
    }

    fn sample(&self, points: &[Vec2], distance: f64) -> PathPoint {
        PathSampler::new(points).sample(distance, self.config.style.tangent)
    }

    fn place_ticks(&self, points: &[Vec2], width: f64) -> Vec<Tick> {
        place_ticks_with(points, &self.tick_params(width), &self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_uses_style_for_ticks() {
        let k = DuctKernel::new(KernelConfig::default());
        let line = k.fit(&VertexPath::open(vec![Vec2::new(0.0, 0.0), Vec2::new(8.0, 0.0)]));
        let ticks = k.place_ticks(&line, 6.0);
        assert_eq!(ticks.len(), 3);
        assert!((ticks[1].total_length() - 10.0).abs() < 1e-12);
        let s = k.sample(&line, 2.0);
        assert!((s.position.x - 2.0).abs() < 1e-12);
        assert!(s.angle().abs() < 1e-12);
    }

    #[test]
    fn kernel_reports_through_its_sink() {
        let k = DuctKernel::with_sink(KernelConfig::default(), Collector::new());
        let out = k.fit(&VertexPath::open(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]));
        assert_eq!(out.len(), 5);
        assert_eq!(k.sink().len(), 1);
    }

    #[test]
    fn unvalidated_segment_count_does_not_panic() {
        let mut cfg = KernelConfig::default();
        cfg.fit.segments = usize::MAX / 2;
        let k = DuctKernel::with_sink(cfg, Silent);
        let out = k.fit(&VertexPath::open(vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]));
        assert_eq!(out.len(), 2 + geometry::limits::MAX_SEGMENTS + 1);
    }
}
