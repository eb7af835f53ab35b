//! Shape descriptors returned by canvas draw operations.

use crate::util::Rect;

/// Geometric outline produced by a draw call.
///
/// A shape describes the path that was built, independent of whether the
/// canvas actually stroked or filled it (border and fill can be gated off).
/// Coordinates are canvas coordinates as passed to the draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight segment between two points
    Line {
        /// Starting X coordinate
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
        /// Effective stroke width in pixels
        thick: f64,
    },
    /// Axis-aligned ellipse inscribed in a bounding box
    Ellipse {
        /// Bounding box X origin
        x: i32,
        /// Bounding box Y origin
        y: i32,
        /// Bounding box width
        w: i32,
        /// Bounding box height
        h: i32,
        /// Effective border width in pixels
        thick: f64,
    },
    /// Closed polygon (rectangles are five-point polygons)
    Polygon {
        /// Vertices in path order; the last point repeats the first
        points: Vec<(i32, i32)>,
        /// Effective border width in pixels
        thick: f64,
    },
}

impl Shape {
    /// Builds the closed rectangle outline extruded from a corner.
    ///
    /// Far corners saturate at the `i32` range.
    pub fn rectangle(x: i32, y: i32, w: i32, h: i32, thick: f64) -> Self {
        let far_x = x.saturating_add(w);
        let far_y = y.saturating_add(h);
        Shape::Polygon {
            points: vec![(x, y), (far_x, y), (far_x, far_y), (x, far_y), (x, y)],
            thick,
        }
    }

    /// Stroke width the shape was built with.
    pub fn thickness(&self) -> f64 {
        match self {
            Shape::Line { thick, .. }
            | Shape::Ellipse { thick, .. }
            | Shape::Polygon { thick, .. } => *thick,
        }
    }

    /// Returns the geometric extent of the path as `(min_x, min_y, max_x, max_y)`.
    ///
    /// Stroke width is not included and degenerate paths are allowed
    /// (a horizontal line has `min_y == max_y`).
    pub fn path_bounds(&self) -> (i32, i32, i32, i32) {
        match self {
            Shape::Line { x1, y1, x2, y2, .. } => {
                (*x1.min(x2), *y1.min(y2), *x1.max(x2), *y1.max(y2))
            }
            Shape::Ellipse { x, y, w, h, .. } => {
                let x2 = x.saturating_add(*w);
                let y2 = y.saturating_add(*h);
                (*x.min(&x2), *y.min(&y2), *x.max(&x2), *y.max(&y2))
            }
            Shape::Polygon { points, .. } => {
                let Some(&(first_x, first_y)) = points.first() else {
                    return (0, 0, 0, 0);
                };
                points.iter().fold(
                    (first_x, first_y, first_x, first_y),
                    |(min_x, min_y, max_x, max_y), &(px, py)| {
                        (min_x.min(px), min_y.min(py), max_x.max(px), max_y.max(py))
                    },
                )
            }
        }
    }

    /// Returns the axis-aligned bounding box expanded to cover stroke width.
    ///
    /// Returns `None` only when the shape has no drawable area.
    pub fn bounding_box(&self) -> Option<Rect> {
        if let Shape::Polygon { points, .. } = self {
            if points.is_empty() {
                return None;
            }
        }
        let (min_x, min_y, max_x, max_y) = self.path_bounds();
        let padding = stroke_padding(self.thickness());
        ensure_positive_rect(
            min_x.saturating_sub(padding),
            min_y.saturating_sub(padding),
            max_x.saturating_add(padding),
            max_y.saturating_add(padding),
        )
    }
}

/// Outcome of a canvas draw operation.
///
/// `Drawn` is returned whenever the canvas surface was acquired, even if
/// border and fill were both switched off. `Skipped` means the surface could
/// not be acquired and nothing was touched.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawResult {
    Drawn(Shape),
    Skipped,
}

impl DrawResult {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawResult::Drawn(_))
    }

    /// Borrow the shape descriptor; `None` for skipped draws.
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            DrawResult::Drawn(shape) => Some(shape),
            DrawResult::Skipped => None,
        }
    }

    pub fn into_shape(self) -> Option<Shape> {
        match self {
            DrawResult::Drawn(shape) => Some(shape),
            DrawResult::Skipped => None,
        }
    }
}

fn stroke_padding(thick: f64) -> i32 {
    let padding = (thick / 2.0).ceil() as i32;
    padding.max(1)
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    let max_x = if min_x == max_x { max_x.saturating_add(1) } else { max_x };
    let max_y = if min_y == max_y { max_y.saturating_add(1) } else { max_y };
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}
