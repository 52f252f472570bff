//! Tick drivers.
//!
//! ## Purpose
//!
//! This module defines the clock contract that drives the controller and two
//! implementations: a wall-clock interval timer for live operation and a
//! manual clock for deterministic runs.
//!
//! ## Design notes
//!
//! * **Serial delivery**: `next_tick` is a blocking pull; ticks can never
//!   overlap, which is what lets the display buffer go unlocked.
//! * **Shutdown**: Stopping is cooperative. A clock returns `false` and the
//!   driven loop simply stops ticking; nothing is drained.
//! * **Std boundary**: Only [`IntervalClock`] touches the wall clock, so it
//!   is the one std-gated piece of the crate.
//!
//! ## Non-goals
//!
//! * Catch-up or tick coalescing after a long render; the period is a target,
//!   not a hard real-time guarantee.
//! * Cancellation primitives beyond running out of ticks.

// Internal dependencies
#[cfg(feature = "std")]
use crate::engine::controller::ScopeConfig;

// External dependencies
#[cfg(feature = "std")]
use std::time::{Duration, Instant};

// ============================================================================
// Frame Clock Trait
// ============================================================================

/// Delivers ticks to the controller, one at a time.
pub trait FrameClock {
    /// Block until the next tick is due. Returns `false` when the clock has
    /// stopped and no further ticks will be delivered.
    fn next_tick(&mut self) -> bool;
}

// ============================================================================
// Manual Clock
// ============================================================================

/// Delivers a fixed number of ticks immediately.
///
/// The deterministic driver for tests and offline replays.
#[derive(Debug, Clone)]
pub struct ManualClock {
    remaining: u64,
}

impl ManualClock {
    /// A clock that delivers exactly `ticks` ticks, back to back.
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl FrameClock for ManualClock {
    fn next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

// ============================================================================
// Interval Clock
// ============================================================================

/// Delivers ticks on a fixed wall-clock interval.
///
/// Sleeps until each deadline; a late tick reschedules from now rather than
/// trying to catch up. Without a tick limit the clock runs until the process
/// is stopped externally.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct IntervalClock {
    period: Duration,
    deadline: Option<Instant>,
    remaining: Option<u64>,
}

#[cfg(feature = "std")]
impl IntervalClock {
    /// A clock ticking every `period_ms` milliseconds, forever.
    pub fn new(period_ms: u64) -> Self {
        Self {
            period: Duration::from_millis(period_ms),
            deadline: None,
            remaining: None,
        }
    }

    /// A clock matching a scope's configured tick interval.
    pub fn from_config(config: &ScopeConfig) -> Self {
        Self::new(config.tick_interval_ms)
    }

    /// Stop after `ticks` ticks.
    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.remaining = Some(ticks);
        self
    }
}

#[cfg(feature = "std")]
impl FrameClock for IntervalClock {
    fn next_tick(&mut self) -> bool {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        match self.deadline {
            // First tick fires immediately.
            None => {
                self.deadline = Some(now + self.period);
            }
            Some(deadline) => {
                if deadline > now {
                    std::thread::sleep(deadline - now);
                    self.deadline = Some(deadline + self.period);
                } else {
                    // Running late: reschedule from now.
                    self.deadline = Some(now + self.period);
                }
            }
        }
        true
    }
}
