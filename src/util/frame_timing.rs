//! Frame-rate measurement for periodic logging.

use web_time::{Duration, Instant};

/// Frame timing with smoothed FPS and a periodic report tick.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Last time `end_frame` asked for a report
    last_report: Instant,
    /// How often a report is due
    report_interval: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames since construction
    frames: u64,
}

impl FrameTiming {
    /// Create a timer that reports about once per `report_interval`.
    pub fn new(report_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            last_report: now,
            report_interval,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
            frames: 0,
        }
    }

    /// Call after presenting a frame. Returns the smoothed FPS when a report
    /// is due.
    pub fn end_frame(&mut self) -> Option<f32> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;
        self.record(elapsed);

        if now.duration_since(self.last_report) >= self.report_interval {
            self.last_report = now;
            Some(self.smoothed_fps)
        } else {
            None
        }
    }

    fn record(&mut self, elapsed: Duration) {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_moves_toward_instant_rate() {
        let mut timing = FrameTiming::new(Duration::from_secs(1));
        for _ in 0..200 {
            timing.record(Duration::from_millis(10));
        }
        assert!((timing.fps() - 100.0).abs() < 1.0);
    }

    #[test]
    fn zero_length_frames_are_ignored() {
        let mut timing = FrameTiming::new(Duration::from_secs(1));
        timing.record(Duration::ZERO);
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn zero_interval_reports_every_frame() {
        let mut timing = FrameTiming::new(Duration::ZERO);
        assert!(timing.end_frame().is_some());
        assert!(timing.end_frame().is_some());
        assert_eq!(timing.frames(), 2);
    }

    #[test]
    fn long_interval_stays_quiet() {
        let mut timing = FrameTiming::new(Duration::from_secs(3600));
        assert!(timing.end_frame().is_none());
        assert_eq!(timing.frames(), 1);
    }
}
