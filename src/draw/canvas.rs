//! Immediate-mode drawing surface backed by a Cairo image surface.

use super::color::Color;
use super::shape::{DrawResult, Shape};
use crate::config::{CanvasConfig, Origin};
use crate::util;
use log::{debug, warn};
use thiserror::Error;

/// Border width used by [`Canvas::draw_rectangle`] when none is given.
pub const RECTANGLE_BORDER_WIDTH: i32 = 1;

/// Frame rate a new canvas starts with.
pub const DEFAULT_FRAMES_PER_SECOND: i32 = 60;

/// Errors that can occur while creating or reading a canvas.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Canvas surface is not readable: {0}")]
    Surface(#[from] cairo::BorrowError),
}

/// Retained raster surface plus the draw-state that parameterizes draw calls.
///
/// The surface is a premultiplied ARGB32 Cairo image surface that starts fully
/// transparent. Draw operations mutate it in place and return a [`DrawResult`]
/// describing the path that was built.
///
/// Colors and the border/fill toggles are plain public state. Widths and the
/// frame rate go through setters that coerce anything below 1 to 1.
///
/// With the default [`Origin::BottomLeft`] the y axis grows upward, so `(0, 0)`
/// is the bottom-left pixel of the surface.
pub struct Canvas {
    width: i32,
    height: i32,
    surface: cairo::ImageSurface,
    origin: Origin,
    frames_per_second: i32,
    frame_count: u64,
    default_line_width: i32,
    default_border_width: i32,
    /// Stroke color for lines
    pub line_color: Color,
    /// Fill color for ellipses and rectangles
    pub fill_color: Color,
    /// Stroke color for ellipse and rectangle borders
    pub border_color: Color,
    /// Whether closed shapes get their border stroked
    pub draw_shapes_with_borders: bool,
    /// Whether closed shapes get filled
    pub draw_shapes_with_fill: bool,
    /// Whether edges are antialiased
    pub antialias: bool,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("origin", &self.origin)
            .field("frames_per_second", &self.frames_per_second)
            .field("frame_count", &self.frame_count)
            .finish_non_exhaustive()
    }
}

fn effective_width(requested: i32, default: i32) -> f64 {
    if requested > 0 {
        requested as f64
    } else {
        default as f64
    }
}

fn coerce_positive(value: i32) -> i32 {
    value.max(1)
}

impl Canvas {
    /// Creates a blank canvas of the given size.
    ///
    /// # Errors
    /// Returns [`CanvasError::InvalidDimensions`] for non-positive sizes and
    /// [`CanvasError::Cairo`] if the surface cannot be allocated.
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        debug!("Created {}x{} canvas", width, height);

        Ok(Self {
            width,
            height,
            surface,
            origin: Origin::BottomLeft,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            frame_count: 0,
            default_line_width: 1,
            default_border_width: 1,
            line_color: Color::default(),
            fill_color: Color::default(),
            border_color: Color::default(),
            draw_shapes_with_borders: true,
            draw_shapes_with_fill: true,
            antialias: true,
        })
    }

    /// Creates a canvas with the size and draw-state defaults from configuration.
    pub fn from_config(config: &CanvasConfig) -> Result<Self, CanvasError> {
        let mut canvas = Self::new(config.width, config.height)?.with_origin(config.origin);
        canvas.set_frames_per_second(config.frames_per_second);
        canvas.set_default_line_width(config.default_line_width);
        canvas.set_default_border_width(config.default_border_width);
        canvas.line_color = config.line_color;
        canvas.fill_color = config.fill_color;
        canvas.border_color = config.border_color;
        canvas.draw_shapes_with_borders = config.draw_shapes_with_borders;
        canvas.draw_shapes_with_fill = config.draw_shapes_with_fill;
        canvas.antialias = config.antialias;
        Ok(canvas)
    }

    /// Switches the coordinate origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn frames_per_second(&self) -> i32 {
        self.frames_per_second
    }

    /// Sets the target frame rate; values below 1 become 1.
    pub fn set_frames_per_second(&mut self, fps: i32) {
        self.frames_per_second = coerce_positive(fps);
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn set_frame_count(&mut self, count: u64) {
        self.frame_count = count;
    }

    /// Increments the frame counter. Called by the frame loop, never by draw calls.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame_count += 1;
        self.frame_count
    }

    pub fn default_line_width(&self) -> i32 {
        self.default_line_width
    }

    /// Sets the width used by lines drawn without an explicit width; values below 1 become 1.
    pub fn set_default_line_width(&mut self, width: i32) {
        self.default_line_width = coerce_positive(width);
    }

    pub fn default_border_width(&self) -> i32 {
        self.default_border_width
    }

    /// Sets the width used by borders drawn without an explicit width; values below 1 become 1.
    pub fn set_default_border_width(&mut self, width: i32) {
        self.default_border_width = coerce_positive(width);
    }

    /// The raster surface, exactly as drawn.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Opens a Cairo context on the surface, configured for canvas coordinates.
    ///
    /// Returns `None` when the surface cannot be drawn on (for example after it
    /// was finished).
    fn begin_drawing(&self) -> Option<cairo::Context> {
        let ctx = match cairo::Context::new(&self.surface) {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Could not acquire canvas surface for drawing: {}", err);
                return None;
            }
        };

        ctx.set_antialias(if self.antialias {
            cairo::Antialias::Default
        } else {
            cairo::Antialias::None
        });

        if self.origin == Origin::BottomLeft {
            ctx.translate(0.0, self.height as f64);
            ctx.scale(1.0, -1.0);
        }

        Some(ctx)
    }

    /// Strokes (if borders are on) and then fills (if fill is on) the current path.
    fn stroke_and_fill(&self, ctx: &cairo::Context, thick: f64) {
        if self.draw_shapes_with_borders {
            self.border_color.apply_source(ctx);
            ctx.set_line_width(thick);
            let _ = ctx.stroke_preserve();
        }

        if self.draw_shapes_with_fill {
            self.fill_color.apply_source(ctx);
            let _ = ctx.fill_preserve();
        }

        ctx.new_path();
    }

    /// Draws a line with the default line width.
    pub fn draw_line(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> DrawResult {
        self.draw_line_with_width(from_x, from_y, to_x, to_y, 0)
    }

    /// Draws a line in `line_color`.
    ///
    /// A positive `line_width` is used as given, anything else falls back to
    /// the default line width. Zero-length segments are still stroked.
    pub fn draw_line_with_width(
        &mut self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        line_width: i32,
    ) -> DrawResult {
        let Some(ctx) = self.begin_drawing() else {
            return DrawResult::Skipped;
        };

        let thick = effective_width(line_width, self.default_line_width);

        self.line_color.apply_source(&ctx);
        ctx.set_line_width(thick);
        ctx.move_to(from_x as f64, from_y as f64);
        ctx.line_to(to_x as f64, to_y as f64);
        let _ = ctx.stroke();

        DrawResult::Drawn(Shape::Line {
            x1: from_x,
            y1: from_y,
            x2: to_x,
            y2: to_y,
            thick,
        })
    }

    /// Draws an ellipse with the default border width.
    pub fn draw_ellipse(
        &mut self,
        centre_x: i32,
        centre_y: i32,
        width: i32,
        height: i32,
    ) -> DrawResult {
        self.draw_ellipse_with_border(centre_x, centre_y, width, height, 0)
    }

    /// Draws an axis-aligned ellipse centred on `(centre_x, centre_y)`.
    ///
    /// The bounding box origin is `(centre_x - width / 2, centre_y - height / 2)`
    /// in integer arithmetic. A positive `border_width` is used as given,
    /// anything else falls back to the default border width.
    pub fn draw_ellipse_with_border(
        &mut self,
        centre_x: i32,
        centre_y: i32,
        width: i32,
        height: i32,
        border_width: i32,
    ) -> DrawResult {
        let Some(ctx) = self.begin_drawing() else {
            return DrawResult::Skipped;
        };

        let (x, y) = util::ellipse_origin(centre_x, centre_y, width, height);
        let thick = effective_width(border_width, self.default_border_width);

        // A zero radius makes the scaling matrix singular; such an ellipse has no path.
        if width != 0 && height != 0 {
            ctx.save().ok();
            ctx.translate(
                x as f64 + width as f64 / 2.0,
                y as f64 + height as f64 / 2.0,
            );
            ctx.scale(width as f64 / 2.0, height as f64 / 2.0);
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
            ctx.restore().ok();
        }

        self.stroke_and_fill(&ctx, thick);

        DrawResult::Drawn(Shape::Ellipse {
            x,
            y,
            w: width,
            h: height,
            thick,
        })
    }

    /// Draws a rectangle with a border width of 1.
    pub fn draw_rectangle(
        &mut self,
        corner_x: i32,
        corner_y: i32,
        width: i32,
        height: i32,
    ) -> DrawResult {
        self.draw_rectangle_with_border(corner_x, corner_y, width, height, RECTANGLE_BORDER_WIDTH)
    }

    /// Draws a rectangle extruded from `(corner_x, corner_y)` by `width` and `height`.
    ///
    /// The outline is the closed path corner → +width → +height → back to the
    /// corner column → corner. A positive `border_width` is used as given,
    /// anything else falls back to the default border width.
    pub fn draw_rectangle_with_border(
        &mut self,
        corner_x: i32,
        corner_y: i32,
        width: i32,
        height: i32,
        border_width: i32,
    ) -> DrawResult {
        let Some(ctx) = self.begin_drawing() else {
            return DrawResult::Skipped;
        };

        let thick = effective_width(border_width, self.default_border_width);
        let shape = Shape::rectangle(corner_x, corner_y, width, height, thick);

        if let Shape::Polygon { points, .. } = &shape {
            let (start_x, start_y) = points[0];
            ctx.move_to(start_x as f64, start_y as f64);
            for &(px, py) in &points[1..] {
                ctx.line_to(px as f64, py as f64);
            }
            ctx.close_path();
        }

        self.stroke_and_fill(&ctx, thick);

        DrawResult::Drawn(shape)
    }

    /// Resets every pixel to fully transparent.
    pub fn clear(&mut self) {
        let Some(ctx) = self.begin_drawing() else {
            return;
        };
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(0.0, 0.0, 0.0, 0.0);
        let _ = ctx.paint();
    }

    /// Samples one pixel in canvas coordinates.
    ///
    /// Returns the premultiplied ARGB32 value (`0xAARRGGBB`), or `None` when the
    /// point is outside the canvas or the surface cannot be read.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }

        let row = match self.origin {
            Origin::BottomLeft => self.height - 1 - y,
            Origin::TopLeft => y,
        };
        let offset = row as usize * self.surface.stride() as usize + x as usize * 4;

        let mut value = None;
        self.surface
            .with_data(|data| {
                value = data
                    .get(offset..offset + 4)
                    .map(|bytes| u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
            })
            .ok()?;
        value
    }

    /// Copies the raw surface bytes (rows top to bottom, `stride` bytes each).
    pub fn snapshot(&self) -> Result<Vec<u8>, CanvasError> {
        let mut bytes = Vec::new();
        self.surface.with_data(|data| bytes.extend_from_slice(data))?;
        Ok(bytes)
    }
}
