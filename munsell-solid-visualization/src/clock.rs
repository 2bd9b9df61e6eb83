//! Frame scheduling
//!
//! The animation loop does not schedule itself; it asks a [`FrameClock`]
//! for the next frame. That keeps the per-step work non-blocking and lets
//! tests drive the loop deterministically.

use std::time::Duration;

/// The injected scheduling primitive.
pub trait FrameClock {
    /// Block until the next frame should be produced. Returns `false`
    /// when the host is done and the loop should end.
    fn next_frame(&mut self) -> bool;
}

/// Paces frames by sleeping a fixed interval; never stops on its own
#[derive(Debug, Clone, Copy)]
pub struct FixedRateClock {
    interval: Duration,
}

impl FixedRateClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }
}

impl FrameClock for FixedRateClock {
    fn next_frame(&mut self) -> bool {
        std::thread::sleep(self.interval);
        true
    }
}

/// Yields a fixed number of frames, then stops. The deterministic clock
/// for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: usize,
}

impl FrameBudget {
    pub fn new(frames: usize) -> Self {
        Self { remaining: frames }
    }
}

impl FrameClock for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
