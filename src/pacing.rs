//! Fixed-cadence frame pacing as a pure function of time.
//!
//! The pacer never sleeps or spawns timers itself; the frame loop passes in
//! the current instant and asks whether a frame is due.

use std::time::{Duration, Instant};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Interval between frames at `fps` frames per second (values below 1 count as 1).
pub fn frame_interval(fps: i32) -> Duration {
    Duration::from_nanos(NANOS_PER_SECOND / fps.max(1) as u64)
}

/// Decides when the next frame is due.
///
/// Frames are scheduled on a fixed grid so that small delays do not
/// accumulate. When the loop falls more than a full interval behind, the
/// grid restarts from the late frame instead of replaying missed ones.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(fps: i32) -> Self {
        Self {
            interval: frame_interval(fps),
            last_frame: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Switches to a new frame rate.
    ///
    /// The last frame stays on record, so the next frame is due one new
    /// interval after it.
    pub fn set_frames_per_second(&mut self, fps: i32) {
        self.interval = frame_interval(fps);
    }

    /// Whether a frame should run at `now`. The very first frame is always due.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_frame {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Records that a frame ran at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_frame = Some(match self.last_frame {
            Some(last) if now.saturating_duration_since(last) < self.interval * 2 => {
                last + self.interval
            }
            _ => now,
        });
    }

    /// Checks [`is_due`](Self::is_due) and marks the frame when it is.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.mark(now);
            true
        } else {
            false
        }
    }

    /// Time left until the next frame; zero when one is already due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.last_frame {
            None => Duration::ZERO,
            Some(last) => (last + self.interval).saturating_duration_since(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn interval_follows_frame_rate() {
        assert_eq!(frame_interval(10), ms(100));
        assert_eq!(frame_interval(1), Duration::from_secs(1));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
        assert_eq!(frame_interval(-3), Duration::from_secs(1));
        assert_eq!(frame_interval(60), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn first_frame_is_due_immediately() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(10);
        assert_eq!(pacer.time_until_due(start), Duration::ZERO);
        assert!(pacer.poll(start));
        assert!(!pacer.poll(start + ms(50)));
        assert_eq!(pacer.time_until_due(start + ms(50)), ms(50));
        assert!(pacer.poll(start + ms(100)));
    }

    #[test]
    fn small_delays_do_not_drift() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(10);
        assert!(pacer.poll(start));
        assert!(pacer.poll(start + ms(130)));
        // Grid stays at 100ms steps, so the next frame is due at 200ms.
        assert!(!pacer.is_due(start + ms(190)));
        assert!(pacer.is_due(start + ms(200)));
    }

    #[test]
    fn rate_change_applies_from_last_frame() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(10);
        assert!(pacer.poll(start));

        pacer.set_frames_per_second(20);
        assert_eq!(pacer.interval(), ms(50));
        assert!(!pacer.is_due(start + ms(40)));
        assert!(pacer.poll(start + ms(50)));
        assert_eq!(pacer.time_until_due(start + ms(50)), ms(50));
    }

    #[test]
    fn long_stall_restarts_grid() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(10);
        assert!(pacer.poll(start));
        assert!(pacer.poll(start + ms(1000)));
        assert!(!pacer.is_due(start + ms(1050)));
        assert!(pacer.is_due(start + ms(1100)));
    }
}
