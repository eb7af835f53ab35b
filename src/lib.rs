//! Immediate-mode 2D canvas with a paced sketch loop.
//!
//! The [`draw`] module holds the canvas itself. The remaining modules drive
//! it: [`input`] decodes the external value stream, [`pacing`] decides when a
//! frame is due, [`sketch`] is the reference scene and [`driver`] runs the loop.

pub mod config;
pub mod draw;
pub mod driver;
pub mod input;
pub mod pacing;
pub mod sketch;
pub mod util;

pub use config::Config;
