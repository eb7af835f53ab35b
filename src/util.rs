//! Utility functions for color conversion and geometry.
//!
//! This module provides:
//! - HSB to RGB conversion used when handing colors to Cairo
//! - Axis-aligned rectangles for shape bounds
//! - Ellipse bounding box calculations

// ============================================================================
// Color Conversion
// ============================================================================

/// Converts hue/saturation/brightness to RGB.
///
/// # Arguments
/// * `hue` - Hue in degrees (0-360, 360 behaves like 0)
/// * `saturation` - Saturation (0.0-1.0)
/// * `brightness` - Brightness/value (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> (f64, f64, f64) {
    let chroma = brightness * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = brightness - chroma;

    let (r, g, b) = if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    (r + m, g + m, b + m)
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle used for shape bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Extents wider than `i32::MAX` saturate.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.saturating_sub(min_x);
        let height = max_y.saturating_sub(min_y);
        Self::new(min_x, min_y, width, height)
    }

    /// Exclusive maximum corner `(x + width, y + height)`.
    pub fn max_corner(&self) -> (i32, i32) {
        (
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }
}

/// Calculates the bounding box origin of an ellipse from its centre and size.
///
/// Half sizes use integer division, so odd sizes truncate toward zero.
///
/// # Returns
/// Tuple `(x, y)` of the bounding box corner with the smallest coordinates
/// (for non-negative sizes). Coordinates saturate at the `i32` range.
pub fn ellipse_origin(centre_x: i32, centre_y: i32, width: i32, height: i32) -> (i32, i32) {
    (
        centre_x.saturating_sub(width / 2),
        centre_y.saturating_sub(height / 2),
    )
}
