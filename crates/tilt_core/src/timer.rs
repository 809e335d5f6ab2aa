//! Spawn and expiry timers with deterministic tick logic.
//!
//! All timing uses integer microseconds (`u64`) so that fixed-step catch-up
//! fires the same number of times no matter how the host slices frames --
//! no floating-point drift across platforms. `secs_to_us` converts the
//! simulation's `f32` step into the timers' domain at the call site.

/// Convert a step delta in seconds to integer microseconds.
pub fn secs_to_us(dt: f32) -> u64 {
    (dt * 1_000_000.0).round() as u64
}

/// Fires every `interval_us`, reporting catch-up fires when a tick spans
/// several intervals. The recurring spawn trigger of the demo scenes.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval_us: u64,
    elapsed_us: u64,
}

impl RepeatingTimer {
    pub fn new(interval_us: u64) -> Self {
        assert!(interval_us > 0, "repeating timer interval must be > 0");
        Self {
            interval_us,
            elapsed_us: 0,
        }
    }

    /// Advance by `dt_us` and return how many times the timer fired.
    pub fn tick(&mut self, dt_us: u64) -> u32 {
        self.elapsed_us += dt_us;
        let fires = self.elapsed_us / self.interval_us;
        self.elapsed_us %= self.interval_us;
        fires as u32
    }

    pub fn interval_us(&self) -> u64 {
        self.interval_us
    }
}

/// Fires exactly once, `delay_us` after construction. Scenes layer these on
/// top of the pool for timed lifetimes ("recycle after 2 seconds") -- the
/// pool itself has no expiry notion.
#[derive(Debug, Clone)]
pub struct OneShotTimer {
    remaining_us: u64,
    fired: bool,
}

impl OneShotTimer {
    pub fn new(delay_us: u64) -> Self {
        Self {
            remaining_us: delay_us,
            fired: false,
        }
    }

    /// Advance by `dt_us`. Returns true on the tick the delay elapses and
    /// false forever after.
    pub fn tick(&mut self, dt_us: u64) -> bool {
        if self.fired {
            return false;
        }
        if dt_us >= self.remaining_us {
            self.remaining_us = 0;
            self.fired = true;
            true
        } else {
            self.remaining_us -= dt_us;
            false
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}
