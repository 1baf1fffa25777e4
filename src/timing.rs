//! Timed suspension for the animation pipeline.
//!
//! Every pause in the slideshow (between typed characters, after a line, after
//! a screen) goes through the [`Clock`] trait rather than calling
//! `thread::sleep` directly. The production clock blocks the single render
//! thread; the test clock records requested durations so the timing rules can
//! be asserted without wall-clock waits.

use std::thread;
use std::time::Duration;

/// Cooperative suspension point for the render pipeline.
pub trait Clock {
    /// Pause for the given duration. A zero duration returns immediately.
    fn sleep(&mut self, duration: Duration);
}

/// Production clock. Blocks the render thread, which is the only thread.
pub struct WallClock;

impl Clock for WallClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Convert delay seconds from a screen record into a `Duration`.
///
/// Floors at zero: `Duration::from_secs_f32` panics on negative input, and a
/// malformed record must stay a recoverable per-screen concern, never a crash.
pub fn secs(seconds: f32) -> Duration {
    Duration::from_secs_f32(seconds.max(0.0))
}

// =============================================================================
// Test Clock
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================
