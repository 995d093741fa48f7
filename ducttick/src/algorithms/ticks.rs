//! Even placement of red-blue-red ticks along a sampled path.

use crate::algorithms::sampler::PathSampler;
use crate::config::TangentMode;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::geometry::limits::{in_spacing_bounds, in_stripe_bounds, MAX_TICKS};
use crate::model::{StripeSegment, Tick, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickParams {
    pub spacing: f64,
    pub red_length: f64,
    pub blue_length: f64,
    pub tangent: TangentMode,
}

impl TickParams {
    pub fn new(spacing: f64, red_length: f64, blue_length: f64) -> Self {
        Self { spacing, red_length, blue_length, tangent: TangentMode::default() }
    }

    fn is_valid(&self) -> bool {
        in_spacing_bounds(self.spacing)
            && in_stripe_bounds(self.red_length)
            && in_stripe_bounds(self.blue_length)
    }
}

/// Interval count and the spacing that divides the path evenly. A path
/// of `count` intervals carries `count + 1` ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlan {
    pub count: usize,
    pub spacing: f64,
}

impl TickPlan {
    pub fn ticks(&self) -> usize {
        self.count.saturating_add(1)
    }
}

/// `None` for a non-positive length or an unusable spacing.
pub fn tick_plan(total: f64, spacing: f64) -> Option<TickPlan> {
    if !(total.is_finite() && total > 0.0) || !in_spacing_bounds(spacing) {
        return None;
    }
    // saturating cast; oversized counts are caught against MAX_TICKS
    let count = ((total / spacing).round() as usize).max(1);
    Some(TickPlan { count, spacing: total / count as f64 })
}

pub fn place_ticks(path: &[Vec2], spacing: f64, red_length: f64, blue_length: f64) -> Vec<Tick> {
    place_ticks_with(path, &TickParams::new(spacing, red_length, blue_length), &LogSink)
}

pub fn place_ticks_with(path: &[Vec2], params: &TickParams, sink: &dyn DiagnosticSink) -> Vec<Tick> {
    if !params.is_valid() {
        sink.report(Diagnostic::InvalidTickParams {
            spacing: params.spacing,
            red: params.red_length,
            blue: params.blue_length,
        });
        return Vec::new();
    }
    let sampler = PathSampler::new(path);
    let total = sampler.length();
    let Some(plan) = tick_plan(total, params.spacing) else {
        return Vec::new();
    };
    if plan.ticks() > MAX_TICKS {
        sink.report(Diagnostic::TickBudgetExceeded { requested: plan.ticks(), limit: MAX_TICKS });
        return Vec::new();
    }

    let mut ticks = Vec::with_capacity(plan.ticks());
    for i in 0..=plan.count {
        let distance = if i == plan.count {
            total
        } else {
            (i as f64 * plan.spacing).min(total)
        };
        let center = sampler.point_at(distance);
        let Some(tangent) = sampler.tangent_at(distance, params.tangent).normalized() else {
            sink.report(Diagnostic::TickSkipped { index: i, distance });
            continue;
        };
        ticks.push(Tick {
            distance,
            center,
            tangent,
            normal: tangent.perp(),
            red1: params.red_length,
            blue: params.blue_length,
            red2: params.red_length,
        });
    }
    ticks
}

/// Red, blue, red for every tick, in placement order.
pub fn tick_segments(ticks: &[Tick]) -> Vec<StripeSegment> {
    ticks.iter().flat_map(|t| t.segments()).collect()
}
