// src/core/sampler.rs

//! Implements the rolling tick-rate estimator fed by the host's processing loop.
//!
//! The sampler counts ticks inside a fixed 1000 ms window and publishes
//! `min(NOMINAL_TPS, count)` when a tick arrives after the window has elapsed.
//!
//! # Stale values
//!
//! There is no independent timer. The window boundary is only checked when a tick
//! arrives, so if the host stalls the last published rate is kept unchanged until
//! ticks resume and another boundary is crossed. Callers that need stall detection
//! must track it themselves.

use crate::core::ticks::TickHandler;
use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Length of one accumulation window.
pub const WINDOW: Duration = Duration::from_millis(1000);

/// The host's fixed nominal cycle rate. Measured rates are clamped to this value.
pub const NOMINAL_TPS: u32 = 20;

/// The mutable counters behind a `RateSampler`.
#[derive(Debug, Clone, Copy)]
pub struct TickWindow {
    /// Ticks observed since `window_start`.
    pub count: u32,
    /// When the current window opened.
    pub window_start: Instant,
    /// The rate computed at the most recent window boundary, in `0..=NOMINAL_TPS`.
    pub last_rate: u32,
}

impl TickWindow {
    fn new(now: Instant) -> Self {
        Self {
            count: 0,
            window_start: now,
            last_rate: NOMINAL_TPS,
        }
    }
}

/// Thread-safe tick-rate estimator.
///
/// `record_tick` is called from the host loop and `current_rate` from request
/// handlers; both take the same short lock, which never spans I/O or allocation.
#[derive(Debug)]
pub struct RateSampler {
    window: Mutex<TickWindow>,
}

impl Default for RateSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSampler {
    /// Creates a sampler whose first window starts now.
    ///
    /// Until the first boundary is crossed the reported rate is `NOMINAL_TPS`.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a sampler whose first window starts at `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            window: Mutex::new(TickWindow::new(start)),
        }
    }

    /// Records one host tick at the current instant.
    pub fn record_tick(&self) {
        self.record_tick_at(Instant::now());
    }

    /// Records one host tick observed at `now`.
    ///
    /// The tick is counted first; if at least `WINDOW` has elapsed since the window
    /// opened, the rate is recomputed and a new window starts at `now`.
    pub fn record_tick_at(&self, now: Instant) {
        let mut window = self.window.lock();
        window.count = window.count.saturating_add(1);

        if now.saturating_duration_since(window.window_start) >= WINDOW {
            window.last_rate = window.count.min(NOMINAL_TPS);
            window.count = 0;
            window.window_start = now;
        }
    }

    /// Returns the rate published at the last window boundary.
    pub fn current_rate(&self) -> u32 {
        self.window.lock().last_rate
    }

    /// Returns a copy of the current window state.
    pub fn window(&self) -> TickWindow {
        *self.window.lock()
    }
}

impl TickHandler for RateSampler {
    fn on_tick(&self) {
        self.record_tick();
    }
}
