//! Configuration type definitions.

use super::enums::{ColorSpec, LineCap, LineJoin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush appearance.
///
/// Applied to the drawing surface when the widget is constructed and again
/// whenever one of the brush setters is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Line cap style (butt, round, square)
    #[serde(default = "default_ends")]
    pub ends: LineCap,

    /// Line join style (miter, round, bevel)
    #[serde(default = "default_joins")]
    pub joins: LineJoin,

    /// Brush width in canvas pixels (valid range: 0.5 - 200.0)
    #[serde(default = "default_size")]
    pub size: f64,

    /// Stroke color
    #[serde(default = "default_brush_color")]
    pub color: ColorSpec,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            ends: default_ends(),
            joins: default_joins(),
            size: default_size(),
            color: default_brush_color(),
        }
    }
}

/// Pointer smoothing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StabilizerConfig {
    /// Smooth pointer motion with an exponential moving average
    #[serde(default = "default_stabilizer_enabled")]
    pub enabled: bool,

    /// Fraction of the remaining distance covered per pointer move
    /// (valid range: 0.01 - 1.0). 1.0 disables smoothing, smaller values lag more.
    #[serde(default = "default_delay")]
    pub delay: f64,

    /// When a stabilized stroke ends, draw a closing segment to the exact
    /// pointer position so the line reaches where the pointer was released
    #[serde(default = "default_snap_to_final_point")]
    pub snap_to_final_point: bool,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            enabled: default_stabilizer_enabled(),
            delay: default_delay(),
            snap_to_final_point: default_snap_to_final_point(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_ends() -> LineCap {
    LineCap::Butt
}

fn default_joins() -> LineJoin {
    LineJoin::Round
}

pub(super) fn default_size() -> f64 {
    5.0
}

fn default_brush_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_stabilizer_enabled() -> bool {
    true
}

pub(super) fn default_delay() -> f64 {
    0.3
}

fn default_snap_to_final_point() -> bool {
    true
}

pub(super) fn default_clear_color() -> ColorSpec {
    ColorSpec::Name("#FFFFFF".to_string())
}
