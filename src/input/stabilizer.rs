//! Exponential smoothing of pointer motion.

use crate::config::StabilizerConfig;
use crate::util::Point;

/// One-step exponential moving average toward the raw pointer position.
///
/// Each pointer move pulls the smoothed cursor `delay` of the way from where
/// it is to where the pointer is. `delay = 1.0` follows the pointer exactly;
/// values near zero lag far behind and iron out jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stabilizer {
    pub enabled: bool,
    pub delay: f64,
    /// Finish strokes with a closing segment to the raw release position.
    pub snap_to_final_point: bool,
}

impl Stabilizer {
    /// Builds a stabilizer with the configured default snap policy.
    pub fn new(enabled: bool, delay: f64) -> Self {
        Self {
            enabled,
            delay,
            snap_to_final_point: StabilizerConfig::default().snap_to_final_point,
        }
    }

    pub fn from_config(config: &StabilizerConfig) -> Self {
        Self {
            enabled: config.enabled,
            delay: config.delay,
            snap_to_final_point: config.snap_to_final_point,
        }
    }

    /// Returns true if the filter changes anything at all.
    pub fn is_smoothing(&self) -> bool {
        self.enabled && self.delay < 1.0
    }

    /// Computes the next committed point given the last one and the raw pointer.
    pub fn target(&self, last: Point, raw: Point) -> Point {
        if self.is_smoothing() {
            last.lerp(raw, self.delay)
        } else {
            raw
        }
    }

    /// Whether ending a stroke should draw a closing segment to the pointer.
    pub fn closes_strokes(&self) -> bool {
        self.enabled && self.snap_to_final_point
    }
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self::from_config(&StabilizerConfig::default())
    }
}
