//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Corner of the surface that canvas coordinate `(0, 0)` refers to.
///
/// `BottomLeft` makes the y axis grow upward, which is what sketches written
/// against the reference scene expect.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// y grows upward from the bottom edge
    #[default]
    BottomLeft,
    /// y grows downward from the top edge (Cairo's native layout)
    TopLeft,
}
