//! Configuration type definitions.

use super::enums::Origin;
use crate::draw::Color;
use crate::draw::color::BLACK;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas size and initial draw-state.
///
/// Widths and the frame rate follow the same coercion as the canvas setters,
/// so anything below 1 ends up as 1.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Target frame rate (valid range: 1 - 240)
    #[serde(default = "default_frames_per_second")]
    pub frames_per_second: i32,

    /// Width for lines drawn without an explicit width
    #[serde(default = "default_stroke_width")]
    pub default_line_width: i32,

    /// Width for borders drawn without an explicit width
    #[serde(default = "default_stroke_width")]
    pub default_border_width: i32,

    /// Initial line color as `[hue, saturation, brightness, alpha]`
    #[serde(default = "default_color")]
    pub line_color: Color,

    /// Initial fill color as `[hue, saturation, brightness, alpha]`
    #[serde(default = "default_color")]
    pub fill_color: Color,

    /// Initial border color as `[hue, saturation, brightness, alpha]`
    #[serde(default = "default_color")]
    pub border_color: Color,

    /// Stroke borders of ellipses and rectangles
    #[serde(default = "default_true")]
    pub draw_shapes_with_borders: bool,

    /// Fill ellipses and rectangles
    #[serde(default = "default_true")]
    pub draw_shapes_with_fill: bool,

    /// Antialias shape edges
    #[serde(default = "default_true")]
    pub antialias: bool,

    /// Which corner is `(0, 0)` (bottom-left, top-left)
    #[serde(default)]
    pub origin: Origin,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            frames_per_second: default_frames_per_second(),
            default_line_width: default_stroke_width(),
            default_border_width: default_stroke_width(),
            line_color: default_color(),
            fill_color: default_color(),
            border_color: default_color(),
            draw_shapes_with_borders: default_true(),
            draw_shapes_with_fill: default_true(),
            antialias: default_true(),
            origin: Origin::default(),
        }
    }
}

/// Input stream settings.
///
/// The input source sends decimal integers terminated by a delimiter byte.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Frame delimiter, must be a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Value the sketch sees before the first complete frame arrives
    #[serde(default)]
    pub initial_value: i32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            initial_value: 0,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    500
}

fn default_height() -> i32 {
    650
}

fn default_frames_per_second() -> i32 {
    60
}

fn default_stroke_width() -> i32 {
    1
}

fn default_color() -> Color {
    BLACK
}

fn default_true() -> bool {
    true
}

fn default_delimiter() -> char {
    '|'
}
