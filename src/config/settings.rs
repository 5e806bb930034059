//! Partial settings supplied by the host at construction time.
//!
//! Every field is optional; [`Config::apply`](super::Config::apply) copies the
//! ones that are present over the current values, one field at a time.

use super::enums::{ColorSpec, LineCap, LineJoin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush overrides.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BrushSettings {
    pub ends: Option<LineCap>,
    pub joins: Option<LineJoin>,
    pub size: Option<f64>,
    pub color: Option<ColorSpec>,
}

/// Stabilizer overrides.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StabilizerSettings {
    pub enabled: Option<bool>,
    pub delay: Option<f64>,
    pub snap_to_final_point: Option<bool>,
}

/// Host-supplied overrides for [`Config`](super::Config).
///
/// # Example JSON
/// ```json
/// { "brush": { "size": 8, "color": "#c0392b" }, "stabilizer": { "delay": 0.5 } }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    pub brush: BrushSettings,
    pub stabilizer: StabilizerSettings,
    #[serde(alias = "clearColor")]
    pub clear_color: Option<ColorSpec>,
}

impl Settings {
    /// Parses settings from a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
