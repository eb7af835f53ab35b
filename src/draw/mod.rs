//! Drawing primitives on a Cairo raster surface.
//!
//! This module defines the core drawing types:
//! - [`Color`]: HSBA color with range normalization
//! - [`Canvas`]: raster surface plus draw-state and primitive operations
//! - [`Shape`]: descriptor of the path a draw call built
//! - [`DrawResult`]: drawn shape, or skipped when the surface was unavailable

pub mod canvas;
pub mod color;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CanvasError};
pub use color::Color;
pub use shape::{DrawResult, Shape};

pub use color::{BLACK, TRANSPARENT, WHITE};
