//! Width tag placed beside the end of a duct.

use ducttick::{Vec2, VertexPath};
use serde::{Deserialize, Serialize};

use crate::render::AciColor;

pub const LABEL_TEXT_HEIGHT: f64 = 4.5;
/// Gap between the path end and the label, added to the duct width.
pub const LABEL_OFFSET: f64 = 3.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidthLabel {
    pub text: String,
    pub position: Vec2,
    pub height: f64,
    pub color: AciColor,
}

/// Width rounded to whole units with the inch and diameter marks.
pub fn width_text(width: f64) -> String {
    format!("{width:.0}\"∅")
}

/// Unit normal at the last vertex, from the final raw segment. Falls back to
/// +Y when that segment has no length.
pub fn end_normal(path: &VertexPath) -> Vec2 {
    match path.vertices.as_slice() {
        [.., a, b] => (*b - *a).normalized().map(Vec2::perp).unwrap_or(Vec2::new(0.0, 1.0)),
        _ => Vec2::new(0.0, 1.0),
    }
}

impl WidthLabel {
    /// `None` for an empty path or a non-positive width.
    pub fn for_path(path: &VertexPath, width: f64) -> Option<WidthLabel> {
        if !(width.is_finite() && width > 0.0) {
            return None;
        }
        let end = *path.vertices.last()?;
        Some(WidthLabel {
            text: width_text(width),
            position: end + end_normal(path) * (LABEL_OFFSET + width),
            height: LABEL_TEXT_HEIGHT,
            color: AciColor::TAG,
        })
    }
}
