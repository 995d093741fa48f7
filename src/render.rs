//! Turns registry state and path geometry into coloured host lines.

use ducttick::{DuctGeometry, StripeKind, Tick, Vec2, VertexPath};
use serde::{Deserialize, Serialize};

use crate::registry::{PathId, RenderRegistry};

/// Host colour index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AciColor(pub u8);

impl AciColor {
    pub const RED: AciColor = AciColor(1);
    pub const YELLOW: AciColor = AciColor(2);
    pub const CYAN: AciColor = AciColor(4);
    /// Duct annotation text.
    pub const TAG: AciColor = AciColor(50);

    pub fn for_stripe(kind: StripeKind) -> AciColor {
        match kind {
            StripeKind::Red => AciColor::RED,
            StripeKind::Blue => AciColor::CYAN,
        }
    }
}

/// One world-space line at constant elevation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub start: Vec2,
    pub end: Vec2,
    pub elevation: f64,
    pub color: AciColor,
}

/// Draws registered paths through a [`DuctGeometry`] implementation.
#[derive(Debug, Clone)]
pub struct RenderAdapter<G> {
    geometry: G,
    elevation: f64,
}

impl<G: DuctGeometry> RenderAdapter<G> {
    pub fn new(geometry: G) -> Self {
        Self { geometry, elevation: 0.0 }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// `None` when `id` is not enabled; the host then draws the path itself.
    pub fn render(&self, registry: &RenderRegistry, id: PathId, path: &VertexPath) -> Option<Vec<LinePrimitive>> {
        let width = registry.width_of(id)?;
        Some(self.draw(path, width, AciColor::CYAN))
    }

    /// Interactive preview: fitted path in yellow plus ticks.
    pub fn preview(&self, path: &VertexPath, width: f64) -> Vec<LinePrimitive> {
        self.draw(path, width, AciColor::YELLOW)
    }

    fn draw(&self, path: &VertexPath, width: f64, path_color: AciColor) -> Vec<LinePrimitive> {
        let fitted = self.geometry.fit(path);
        if fitted.len() < 2 {
            return Vec::new();
        }
        let ticks = self.geometry.place_ticks(&fitted, width);
        let mut out = Vec::with_capacity(fitted.len() - 1 + ticks.len() * 3);
        out.extend(fitted.windows(2).map(|w| self.line(w[0], w[1], path_color)));
        self.push_ticks(&ticks, &mut out);
        out
    }

    fn push_ticks(&self, ticks: &[Tick], out: &mut Vec<LinePrimitive>) {
        for t in ticks {
            for s in t.segments() {
                out.push(self.line(s.start, s.end, AciColor::for_stripe(s.kind)));
            }
        }
    }

    fn line(&self, start: Vec2, end: Vec2, color: AciColor) -> LinePrimitive {
        LinePrimitive { start, end, elevation: self.elevation, color }
    }
}
