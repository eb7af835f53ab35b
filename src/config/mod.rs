//! Configuration file support for easel.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/easel/config.toml`. Settings include the canvas size, the initial
//! draw-state, the frame rate and the input stream delimiter.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::Origin;
pub use types::{CanvasConfig, InputConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_DIMENSION: i32 = 8192;
const MAX_FRAMES_PER_SECOND: i32 = 240;
const MAX_STROKE_WIDTH: i32 = 100;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 500
/// height = 650
/// frames_per_second = 60
/// fill_color = [50.0, 80.0, 90.0, 100.0]
/// origin = "bottom-left"
///
/// [input]
/// delimiter = "|"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and initial draw-state
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Input stream settings
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `canvas.frames_per_second`: 1 - 240
    /// - `canvas.default_line_width`, `canvas.default_border_width`: 1 - 100
    /// - `input.delimiter`: a single ASCII character that is not a digit or sign
    fn validate_and_clamp(&mut self) {
        let canvas = &mut self.canvas;

        if !(1..=MAX_DIMENSION).contains(&canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                canvas.width,
                MAX_DIMENSION
            );
            canvas.width = canvas.width.clamp(1, MAX_DIMENSION);
        }

        if !(1..=MAX_DIMENSION).contains(&canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                canvas.height,
                MAX_DIMENSION
            );
            canvas.height = canvas.height.clamp(1, MAX_DIMENSION);
        }

        if !(1..=MAX_FRAMES_PER_SECOND).contains(&canvas.frames_per_second) {
            log::warn!(
                "Invalid frames_per_second {}, clamping to 1-{} range",
                canvas.frames_per_second,
                MAX_FRAMES_PER_SECOND
            );
            canvas.frames_per_second = canvas.frames_per_second.clamp(1, MAX_FRAMES_PER_SECOND);
        }

        if !(1..=MAX_STROKE_WIDTH).contains(&canvas.default_line_width) {
            log::warn!(
                "Invalid default_line_width {}, clamping to 1-{} range",
                canvas.default_line_width,
                MAX_STROKE_WIDTH
            );
            canvas.default_line_width = canvas.default_line_width.clamp(1, MAX_STROKE_WIDTH);
        }

        if !(1..=MAX_STROKE_WIDTH).contains(&canvas.default_border_width) {
            log::warn!(
                "Invalid default_border_width {}, clamping to 1-{} range",
                canvas.default_border_width,
                MAX_STROKE_WIDTH
            );
            canvas.default_border_width = canvas.default_border_width.clamp(1, MAX_STROKE_WIDTH);
        }

        let delimiter = self.input.delimiter;
        if !delimiter.is_ascii() || delimiter.is_ascii_digit() || matches!(delimiter, '-' | '+') {
            log::warn!("Invalid input delimiter {:?}, falling back to '|'", delimiter);
            self.input.delimiter = '|';
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/easel/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("easel");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
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

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.width, 500);
        assert_eq!(config.canvas.height, 650);
        assert_eq!(config.canvas.frames_per_second, 60);
        assert_eq!(config.canvas.origin, Origin::BottomLeft);
        assert_eq!(config.input.delimiter, '|');
    }

    #[test]
    fn parses_colors_and_origin() {
        let config = Config::from_toml(
            r#"
            [canvas]
            fill_color = [410.0, 80.0, 90.0, 100.0]
            origin = "top-left"
            antialias = false

            [input]
            delimiter = ";"
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.fill_color.hue(), 50.0);
        assert_eq!(config.canvas.origin, Origin::TopLeft);
        assert!(!config.canvas.antialias);
        assert_eq!(config.input.delimiter, ';');
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::from_toml(
            r#"
            [canvas]
            width = 0
            height = 100000
            frames_per_second = -1
            default_line_width = -5
            default_border_width = 500

            [input]
            delimiter = "7"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_DIMENSION);
        assert_eq!(config.canvas.frames_per_second, 1);
        assert_eq!(config.canvas.default_line_width, 1);
        assert_eq!(config.canvas.default_border_width, MAX_STROKE_WIDTH);
        assert_eq!(config.input.delimiter, '|');
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn load_from_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas]\nwidth = 320\nframes_per_second = 1000\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.frames_per_second, MAX_FRAMES_PER_SECOND);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("canvas"));
        assert!(schema.contains("delimiter"));
    }
}
