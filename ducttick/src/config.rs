//! Kernel configuration: corner strategy, sampling and tick style.
//!
//! Every field has a default carrying the fixed host constants, so an empty
//! JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithms::fillet::FILLET_SEGMENTS;
use crate::geometry::limits::{
    in_segment_bounds, in_spacing_bounds, in_stripe_bounds, in_width_bounds, RADIUS_PERCENT_MAX,
};
use crate::geometry::tolerance::TANGENT_PROBE;

pub const DEFAULT_TICK_SPACING: f64 = 4.0;
pub const DEFAULT_RED_LENGTH: f64 = 2.0;
pub const DEFAULT_BLUE_WIDTH: f64 = 8.0;
pub const DEFAULT_RADIUS_PERCENT: f64 = 0.1;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong type.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A numeric field outside its accepted range.
    #[error("{field} = {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },
    /// Arc segment count outside the sampling limits.
    #[error("segment count {got} is out of range")]
    Segments { got: usize },
}

/// How interior corners are replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CornerStyle {
    /// Radius proportional to the shorter adjacent leg.
    #[default]
    Fillet,
    /// Absolute radius with a sweep-dependent segment count.
    SoftChamfer { softness: f64 },
    /// Corners kept as drawn.
    Sharp,
}

/// How the direction of the path is estimated at a distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TangentMode {
    /// `point_at(d + delta) - point_at(max(0, d - delta))`.
    CentralDifference {
        #[serde(default = "default_probe")]
        delta: f64,
    },
    /// Direction of the segment containing the distance; the incoming one at a vertex.
    Segment,
}

fn default_probe() -> f64 {
    TANGENT_PROBE
}

impl Default for TangentMode {
    fn default() -> Self {
        TangentMode::CentralDifference { delta: TANGENT_PROBE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    pub corner: CornerStyle,
    pub radius_percent: f64,
    /// Segments per fillet arc. Soft chamfers pick their own count.
    pub segments: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            corner: CornerStyle::Fillet,
            radius_percent: DEFAULT_RADIUS_PERCENT,
            segments: FILLET_SEGMENTS,
        }
    }
}

impl FitOptions {
    pub fn with_radius_percent(radius_percent: f64) -> Self {
        Self { radius_percent, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuctStyle {
    pub tick_spacing: f64,
    pub red_length: f64,
    pub tangent: TangentMode,
}

impl Default for DuctStyle {
    fn default() -> Self {
        Self {
            tick_spacing: DEFAULT_TICK_SPACING,
            red_length: DEFAULT_RED_LENGTH,
            tangent: TangentMode::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub fit: FitOptions,
    pub style: DuctStyle,
}

impl KernelConfig {
    /// Parse and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: KernelConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rp = self.fit.radius_percent;
        if !(rp.is_finite() && rp > 0.0 && rp <= RADIUS_PERCENT_MAX) {
            return Err(ConfigError::OutOfRange { field: "fit.radius_percent", value: rp });
        }
        if !in_segment_bounds(self.fit.segments) {
            return Err(ConfigError::Segments { got: self.fit.segments });
        }
        if let CornerStyle::SoftChamfer { softness } = self.fit.corner {
            if !in_width_bounds(softness) {
                return Err(ConfigError::OutOfRange { field: "fit.corner.softness", value: softness });
            }
        }
        let st = &self.style;
        if !in_spacing_bounds(st.tick_spacing) {
            return Err(ConfigError::OutOfRange { field: "style.tick_spacing", value: st.tick_spacing });
        }
        if !in_stripe_bounds(st.red_length) {
            return Err(ConfigError::OutOfRange { field: "style.red_length", value: st.red_length });
        }
        if let TangentMode::CentralDifference { delta } = st.tangent {
            if !(delta.is_finite() && delta > 0.0) {
                return Err(ConfigError::OutOfRange { field: "style.tangent.delta", value: delta });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_constants() {
        let c = KernelConfig::default();
        assert_eq!(c.fit.corner, CornerStyle::Fillet);
        assert_eq!(c.fit.segments, 16);
        assert!((c.fit.radius_percent - 0.1).abs() < 1e-12);
        assert!((c.style.tick_spacing - 4.0).abs() < 1e-12);
        assert!((c.style.red_length - 2.0).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_object_is_default() {
        let c = KernelConfig::from_json_str("{}").unwrap();
        assert_eq!(c, KernelConfig::default());
    }

    #[test]
    fn zero_segments_rejected() {
        let mut c = KernelConfig::default();
        c.fit.segments = 0;
        assert!(matches!(c.validate(), Err(ConfigError::Segments { got: 0 })));
    }
}
