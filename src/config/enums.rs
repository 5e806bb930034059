//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape drawn at the open ends of a stroke.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineCap {
    /// Flat end exactly at the endpoint
    Butt,
    /// Semicircle centered on the endpoint
    Round,
    /// Square extending half the line width past the endpoint
    Square,
}

/// Shape drawn where two segments of a path meet.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or CSS hex
/// color = "black"
/// color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black,
    /// transparent) or a hex string (`#rgb`, `#rrggbb`, `#rrggbbaa`)
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, or `None` if the string is not a color.
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => Color::parse(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the specification to a [`Color`], falling back with a warning
    /// when the string is not recognized.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.resolve().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback.to_hex());
            fallback
        })
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_hex())
    }
}
