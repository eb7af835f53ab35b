//! External numeric input for the frame loop.
//!
//! An input source (a serial device, a pipe, stdin) sends decimal integers
//! terminated by a delimiter byte, e.g. `120|87|`. This module provides:
//! - [`FrameDecoder`]: turns raw bytes into integers, discarding malformed frames
//! - [`input_slot`]: a single-slot channel holding the latest value
//! - [`spawn_reader`]: a thread pumping a byte reader into the slot

pub mod decoder;
pub mod reader;
pub mod slot;

pub use decoder::{FrameDecoder, InputError};
pub use reader::{ReaderStats, pump, spawn_reader};
pub use slot::{InputPublisher, LatestInput, input_slot};
