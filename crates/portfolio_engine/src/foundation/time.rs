//! Time management utilities
//!
//! Animation and UI fades only ever look at monotonic milliseconds supplied by
//! a [`Clock`]. Hosts driving a real render loop use [`SystemClock`]; tests and
//! hosts that already receive frame timestamps push them through a
//! [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic time in milliseconds
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Externally driven clock
///
/// Clones share the same time value, so a host can keep one handle and give
/// another to the scene manager.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current time; values earlier than the current time are ignored
    pub fn set(&self, now_ms: f64) {
        if now_ms >= self.now.get() {
            self.now.set(now_ms);
        }
    }

    /// Move time forward
    pub fn advance(&self, delta_ms: f64) {
        self.set(self.now.get() + delta_ms.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Frame timer measured against a [`Clock`]
pub struct Timer {
    last_frame_ms: f64,
    delta_ms: f64,
    total_ms: f64,
    frame_count: u64,
}

impl Timer {
    /// Create a timer starting at the given time
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_frame_ms: now_ms,
            delta_ms: 0.0,
            total_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self, now_ms: f64) {
        self.delta_ms = (now_ms - self.last_frame_ms).max(0.0);
        self.total_ms += self.delta_ms;
        self.last_frame_ms = now_ms;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in milliseconds
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f64 {
        if self.total_ms > 0.0 {
            self.frame_count as f64 * 1000.0 / self.total_ms
        } else {
            0.0
        }
    }
}
