//! Caller-owned frame loop tying pacing, input and the sketch together.

use crate::draw::Canvas;
use crate::input::LatestInput;
use crate::pacing::{FramePacer, frame_interval};
use crate::sketch::{FrameReport, Sketch};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Longest single sleep, so stop requests are noticed promptly.
const MAX_SLEEP: Duration = Duration::from_millis(100);

/// Receives the canvas after every completed frame.
pub trait DisplaySink {
    fn present(&mut self, canvas: &Canvas);
}

/// Sink that only logs each presented frame.
#[derive(Debug, Default)]
pub struct LogSink;

impl DisplaySink for LogSink {
    fn present(&mut self, canvas: &Canvas) {
        debug!(
            "Frame {} ready ({}x{})",
            canvas.frame_count(),
            canvas.width(),
            canvas.height()
        );
    }
}

/// Runs the sketch at the canvas frame rate.
pub struct Driver<S: DisplaySink> {
    sketch: Sketch,
    pacer: FramePacer,
    input: LatestInput,
    sink: S,
}

impl<S: DisplaySink> Driver<S> {
    /// Creates a driver paced by the sketch canvas' frame rate.
    pub fn new(sketch: Sketch, input: LatestInput, sink: S) -> Self {
        let pacer = FramePacer::new(sketch.canvas().frames_per_second());
        Self {
            sketch,
            pacer,
            input,
            sink,
        }
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs one frame if one is due at `now`.
    ///
    /// A frame reads the latest input, draws the sketch, advances the canvas
    /// frame count and presents the canvas to the sink. Frame rate changes made
    /// on the canvas take effect on the next call.
    pub fn tick(&mut self, now: Instant) -> Option<FrameReport> {
        self.sync_frame_rate();
        if !self.pacer.poll(now) {
            return None;
        }

        let (value, changed) = self.input.take();
        if changed {
            debug!("Input changed to {}", value);
        }

        let report = self.sketch.draw(value);
        if report.skipped > 0 {
            warn!(
                "{} draw calls skipped: canvas surface unavailable",
                report.skipped
            );
        }

        self.sketch.canvas_mut().advance_frame();
        self.sink.present(self.sketch.canvas());
        Some(report)
    }

    fn sync_frame_rate(&mut self) {
        let fps = self.sketch.canvas().frames_per_second();
        if frame_interval(fps) != self.pacer.interval() {
            debug!("Frame rate changed to {} fps", fps);
            self.pacer.set_frames_per_second(fps);
        }
    }

    /// Loops until `stop` is set or `max_frames` frames have run.
    ///
    /// Returns the number of frames run.
    pub fn run(&mut self, stop: &AtomicBool, max_frames: Option<u64>) -> u64 {
        info!(
            "Running sketch at {} fps",
            self.sketch.canvas().frames_per_second()
        );

        let mut frames = 0;
        loop {
            if stop.load(Ordering::Acquire) {
                info!("Stop requested - leaving frame loop");
                break;
            }
            if max_frames.is_some_and(|limit| frames >= limit) {
                info!("Frame limit of {} reached", frames);
                break;
            }

            if self.tick(Instant::now()).is_some() {
                frames += 1;
                continue;
            }

            let wait = self.pacer.time_until_due(Instant::now()).min(MAX_SLEEP);
            thread::sleep(wait);
        }

        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::input_slot;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<u64>,
    }

    impl DisplaySink for RecordingSink {
        fn present(&mut self, canvas: &Canvas) {
            self.frames.push(canvas.frame_count());
        }
    }

    fn fast_sketch(fps: i32) -> Sketch {
        let mut sketch = Sketch::new().unwrap();
        sketch.canvas_mut().set_frames_per_second(fps);
        sketch
    }

    #[test]
    fn tick_runs_only_when_due() {
        let (_publisher, latest) = input_slot(0);
        let mut driver = Driver::new(fast_sketch(10), latest, RecordingSink::default());
        let start = Instant::now();

        assert!(driver.tick(start).is_some());
        assert!(driver.tick(start + Duration::from_millis(40)).is_none());
        assert!(driver.tick(start + Duration::from_millis(100)).is_some());

        assert_eq!(driver.sink().frames, vec![1, 2]);
        assert_eq!(driver.sketch().canvas().frame_count(), 2);
    }

    #[test]
    fn tick_reads_latest_input() {
        let (publisher, latest) = input_slot(0);
        let mut driver = Driver::new(fast_sketch(10), latest, RecordingSink::default());
        let start = Instant::now();

        publisher.publish(5);
        publisher.publish(1000);
        let report = driver.tick(start).unwrap();
        assert!(!report.reversed);
        assert_eq!(driver.sketch().pendulum_x(), 270);
    }

    #[test]
    fn canvas_frame_rate_change_reaches_pacer() {
        let (_publisher, latest) = input_slot(0);
        let mut driver = Driver::new(fast_sketch(10), latest, RecordingSink::default());
        let start = Instant::now();

        assert!(driver.tick(start).is_some());
        driver.sketch.canvas_mut().set_frames_per_second(50);
        assert!(driver.tick(start + Duration::from_millis(10)).is_none());
        assert!(driver.tick(start + Duration::from_millis(20)).is_some());
        assert_eq!(driver.sink().frames, vec![1, 2]);
    }

    #[test]
    fn run_honours_frame_limit() {
        let (_publisher, latest) = input_slot(0);
        let mut driver = Driver::new(fast_sketch(240), latest, RecordingSink::default());
        let stop = AtomicBool::new(false);

        assert_eq!(driver.run(&stop, Some(3)), 3);
        assert_eq!(driver.sink().frames, vec![1, 2, 3]);
    }

    #[test]
    fn run_stops_when_flag_set() {
        let (_publisher, latest) = input_slot(0);
        let mut driver = Driver::new(fast_sketch(240), latest, LogSink);
        let stop = AtomicBool::new(true);

        assert_eq!(driver.run(&stop, None), 0);
        assert_eq!(driver.sketch().canvas().frame_count(), 0);
    }
}
