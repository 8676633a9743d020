//! Frame rate readout.
//!
//! The simulation is tick-based and never reads the clock. This only feeds
//! the window title and the debug log.

use std::time::Instant;

use crate::config::FPS_WINDOW;

/// Counts frames and averages the rate over `FPS_WINDOW`-long windows.
#[derive(Debug)]
pub struct FpsCounter {
    frames: u64,
    window_start: Instant,
    window_frames: u64,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
            window_frames: 0,
            fps: 0.0,
        }
    }

    /// Record one finished frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.frames += 1;
        self.window_frames += 1;

        let span = now.saturating_duration_since(self.window_start);
        if span >= FPS_WINDOW {
            self.fps = self.window_frames as f32 / span.as_secs_f32();
            self.window_frames = 0;
            self.window_start = now;
        }
    }

    /// Frames recorded so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rate over the last completed window. Zero until one has completed.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_starts_empty() {
        let counter = FpsCounter::new();
        assert_eq!(counter.frames(), 0);
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn test_rate_holds_until_window_closes() {
        let start = Instant::now();
        let mut counter = FpsCounter::starting_at(start);

        for i in 1..=9 {
            counter.tick_at(start + Duration::from_millis(i * 50));
        }
        assert_eq!(counter.frames(), 9);
        assert_eq!(counter.fps(), 0.0);

        // 10 frames over 500 ms
        counter.tick_at(start + FPS_WINDOW);
        assert_eq!(counter.frames(), 10);
        assert!((counter.fps() - 20.0).abs() < 1e-3, "{}", counter.fps());
    }

    #[test]
    fn test_next_window_counts_from_zero() {
        let start = Instant::now();
        let mut counter = FpsCounter::starting_at(start);
        counter.tick_at(start + FPS_WINDOW);
        assert!((counter.fps() - 2.0).abs() < 1e-3);

        // One slow frame a full second later
        counter.tick_at(start + FPS_WINDOW + Duration::from_secs(1));
        assert!((counter.fps() - 1.0).abs() < 1e-3);
        assert_eq!(counter.frames(), 2);
    }
}
