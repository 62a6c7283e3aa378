//! Frame timer for the render loop.

use std::time::{Duration, Instant};

/// Measures frame deltas and counts frames since the loop started.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    last_tick: Instant,
    frames: u64,
}

impl Timer {
    /// Create a new timer, starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frames: 0,
        }
    }

    /// Total time since the timer was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Mark the start of a new frame and return the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        self.frames += 1;
        delta
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average frames per second since the timer started.
    ///
    /// Returns `0.0` until some time has passed.
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }

}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
