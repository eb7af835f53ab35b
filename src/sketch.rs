//! Reference scene: two trapezoids and a pendulum steered by external input.
//!
//! Each frame paints a translucent white wash over the previous one, traces two
//! nested trapezoids, then swings a pendulum line whose horizontal reach is
//! bounded by the latest input value. Whenever the pendulum turns around a
//! green marker square is drawn in the lower left.

use crate::draw::{Canvas, CanvasError, Color, DrawResult};
use log::trace;

/// Canvas size the scene was composed for.
pub const SKETCH_WIDTH: i32 = 500;
pub const SKETCH_HEIGHT: i32 = 650;

/// Horizontal pixels the pendulum moves per frame.
const SWING_SPEED: i32 = 20;

/// Height of the pendulum pivot and of the top trapezoid's lower edge.
const PIVOT_Y: i32 = 208;

/// Summary of one composed frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Draw calls that reached the surface
    pub drawn: usize,
    /// Draw calls skipped because the surface was unavailable
    pub skipped: usize,
    /// Whether the pendulum changed direction this frame
    pub reversed: bool,
}

impl FrameReport {
    fn record(&mut self, result: DrawResult) {
        if result.is_drawn() {
            self.drawn += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Vertical pendulum offset for a horizontal displacement `delta` from the pivot.
///
/// The ratio `delta / radius` is taken in integer arithmetic and clamped to
/// `[-1, 1]` before `acos`, so any displacement yields a finite offset. The
/// resulting angle is scaled by `180 / π` before `sin`, which gives the
/// pendulum its characteristic jumpy motion. The result truncates toward zero.
pub fn pendulum_offset(delta: i32, radius: i32) -> i32 {
    let Some(ratio) = delta.checked_div(radius) else {
        return 0;
    };
    let angle = (ratio as f64).clamp(-1.0, 1.0).acos();
    (radius as f64 * (angle * (180.0 / std::f64::consts::PI)).sin()) as i32
}

/// The reference scene and its animation state.
#[derive(Debug)]
pub struct Sketch {
    canvas: Canvas,
    pendulum_x: i32,
    step: i32,
    radius: i32,
}

impl Sketch {
    /// Creates the scene on a 500x650 canvas running at 60 fps.
    pub fn new() -> Result<Self, CanvasError> {
        let mut canvas = Canvas::new(SKETCH_WIDTH, SKETCH_HEIGHT)?;
        canvas.set_frames_per_second(60);
        Ok(Self::with_canvas(canvas))
    }

    /// Runs the scene on an existing canvas.
    pub fn with_canvas(canvas: Canvas) -> Self {
        let pendulum_x = canvas.width() / 2;
        Self {
            canvas,
            pendulum_x,
            step: 1,
            radius: 300,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Current x coordinate of the pendulum tip.
    pub fn pendulum_x(&self) -> i32 {
        self.pendulum_x
    }

    /// Current swing direction, `1` or `-1`.
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Composes one frame. `input` bounds how far the pendulum swings from the centre.
    pub fn draw(&mut self, input: i32) -> FrameReport {
        let mut report = FrameReport::default();
        let w = self.canvas.width();
        let h = self.canvas.height();
        let canvas = &mut self.canvas;

        canvas.draw_shapes_with_borders = false;
        canvas.fill_color = Color::new(0.0, 0.0, 100.0, 90.0);
        report.record(canvas.draw_rectangle(0, 0, w, h));

        // Outer trapezoid
        canvas.fill_color = Color::new(50.0, 80.0, 90.0, 100.0);
        report.record(canvas.draw_line(25, 25, w - 25, 25));
        report.record(canvas.draw_line(25, 25, 100, h - 25));
        report.record(canvas.draw_line(w - 25, 25, w - 100, h - 25));
        report.record(canvas.draw_line(w - 100, h - 25, 100, h - 25));

        // Inner trapezoid
        report.record(canvas.draw_line(50, 50, w - 50, 50));
        report.record(canvas.draw_line(50, 50, 125, h - 50));
        report.record(canvas.draw_line(w - 50, 50, w - 125, h - 50));
        report.record(canvas.draw_line(w - 125, h - 50, 125, h - 50));

        // Top trapezoid, closed at the pivot height
        report.record(canvas.draw_line(50, 50, w - 50, 50));
        report.record(canvas.draw_line(50, 50, 73, PIVOT_Y));
        report.record(canvas.draw_line(w - 50, 50, w - 73, PIVOT_Y));
        report.record(canvas.draw_line(w - 75, PIVOT_Y, 75, PIVOT_Y));

        self.pendulum_x = self.pendulum_x.saturating_add(self.step * SWING_SPEED);

        // Any i32 is valid input, so the swing bounds saturate instead of wrapping.
        let centre = w / 2;
        if self.pendulum_x >= centre.saturating_add(input)
            || self.pendulum_x <= centre.saturating_sub(input)
        {
            self.step = -self.step;
            report.reversed = true;
            canvas.fill_color = Color::new(135.0, 100.0, 100.0, 100.0);
            report.record(canvas.draw_rectangle_with_border(25, 550, 50, 50, 10));
        }

        let offset = pendulum_offset(self.pendulum_x.saturating_sub(centre), self.radius);
        report.record(canvas.draw_line(
            centre,
            PIVOT_Y,
            self.pendulum_x,
            PIVOT_Y.saturating_add(offset),
        ));

        trace!(
            "Sketch frame: input={} pendulum_x={} offset={} {:?}",
            input, self.pendulum_x, offset, report
        );

        report
    }
}
