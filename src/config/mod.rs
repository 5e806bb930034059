//! Configuration file support for ezcanvas.
//!
//! This module handles loading and validating widget settings from the
//! configuration file located at `~/.config/ezcanvas/config.toml`, and merging
//! host-supplied [`Settings`] over them. Settings cover the brush style, the
//! pointer stabilizer and the background clear color.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod settings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, LineCap, LineJoin};
pub use settings::{BrushSettings, Settings, StabilizerSettings};
pub use types::{BrushConfig, StabilizerConfig};

use crate::draw::{BLACK, Color, WHITE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const BRUSH_SIZE_RANGE: std::ops::RangeInclusive<f64> = 0.5..=200.0;
const DELAY_RANGE: std::ops::RangeInclusive<f64> = 0.01..=1.0;

/// Main configuration structure containing all widget settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// clear_color = "#FFFFFF"
///
/// [brush]
/// ends = "butt"
/// joins = "round"
/// size = 5.0
/// color = "#000000"
///
/// [stabilizer]
/// enabled = true
/// delay = 0.3
/// snap_to_final_point = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Color used by `clear_to_background`
    #[serde(default = "types::default_clear_color")]
    pub clear_color: ColorSpec,

    /// Brush style (cap, join, width, color)
    #[serde(default)]
    pub brush: BrushConfig,

    /// Pointer smoothing
    #[serde(default)]
    pub stabilizer: StabilizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_color: types::default_clear_color(),
            brush: BrushConfig::default(),
            stabilizer: StabilizerConfig::default(),
        }
    }
}

impl Config {
    /// Builds a configuration from defaults with `settings` merged on top.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut config = Self::default();
        config.apply(settings);
        config
    }

    /// Overrides every field that `settings` provides, then re-validates.
    pub fn apply(&mut self, settings: &Settings) {
        let brush = &settings.brush;
        if let Some(ends) = brush.ends {
            self.brush.ends = ends;
        }
        if let Some(joins) = brush.joins {
            self.brush.joins = joins;
        }
        if let Some(size) = brush.size {
            self.brush.size = size;
        }
        if let Some(color) = &brush.color {
            self.brush.color = color.clone();
        }

        let stabilizer = &settings.stabilizer;
        if let Some(enabled) = stabilizer.enabled {
            self.stabilizer.enabled = enabled;
        }
        if let Some(delay) = stabilizer.delay {
            self.stabilizer.delay = delay;
        }
        if let Some(snap) = stabilizer.snap_to_final_point {
            self.stabilizer.snap_to_final_point = snap;
        }

        if let Some(color) = &settings.clear_color {
            self.clear_color = color.clone();
        }

        self.validate_and_clamp();
    }

    /// Resolved brush color; unknown color strings fall back to black.
    pub fn brush_color(&self) -> Color {
        self.brush.color.to_color_or(BLACK)
    }

    /// Resolved clear color; unknown color strings fall back to white.
    pub fn clear_color(&self) -> Color {
        self.clear_color.to_color_or(WHITE)
    }

    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default when not a number) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `brush.size`: 0.5 - 200.0
    /// - `stabilizer.delay`: 0.01 - 1.0
    fn validate_and_clamp(&mut self) {
        if !self.brush.size.is_finite() {
            warn!(
                "Invalid brush size {}, using default {:.1}",
                self.brush.size,
                types::default_size()
            );
            self.brush.size = types::default_size();
        } else if !BRUSH_SIZE_RANGE.contains(&self.brush.size) {
            warn!(
                "Invalid brush size {:.1}, clamping to 0.5-200.0 range",
                self.brush.size
            );
            self.brush.size = self
                .brush
                .size
                .clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end());
        }

        if !self.stabilizer.delay.is_finite() {
            warn!(
                "Invalid stabilizer delay {}, using default {:.2}",
                self.stabilizer.delay,
                types::default_delay()
            );
            self.stabilizer.delay = types::default_delay();
        } else if !DELAY_RANGE.contains(&self.stabilizer.delay) {
            warn!(
                "Invalid stabilizer delay {:.3}, clamping to 0.01-1.0 range",
                self.stabilizer.delay
            );
            self.stabilizer.delay = self
                .stabilizer
                .delay
                .clamp(*DELAY_RANGE.start(), *DELAY_RANGE.end());
        }

        if self.brush.color.resolve().is_none() {
            warn!(
                "Invalid brush color {:?}, falling back to black",
                self.brush.color
            );
            self.brush.color = BLACK.into();
        }

        if self.clear_color.resolve().is_none() {
            warn!(
                "Invalid clear color {:?}, falling back to white",
                self.clear_color
            );
            self.clear_color = WHITE.into();
        }
    }

    /// Parses a TOML document and validates the result.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source).context("Failed to parse config")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/ezcanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("ezcanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration file at `path`.
    ///
    /// Unlike [`load`](Self::load), a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `path` as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                path.display()
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(path, default_config)?;

        info!("Created default config at {}", path.display());
        Ok(())
    }
}
