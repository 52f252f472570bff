//! # savgol-scope — streaming Savitzky–Golay scope display
//!
//! This crate ingests a live stream of scalar sensor readings, smooths them
//! in fixed-size batches with a Savitzky–Golay (local polynomial regression)
//! filter, and maintains a fixed-length rolling display buffer that a
//! visualization layer redraws on a timer.
//!
//! ## How it works
//!
//! Data flows one way:
//!
//! ```text
//! SampleSource -> BatchAccumulator -> SavgolDesign -> RingDisplayBuffer -> Renderer
//! ```
//!
//! One sample is fetched per tick. When a batch of `batch_size` samples has
//! accumulated, the batch is smoothed and written into the display buffer at
//! a rotating offset, and the offset advances by `batch_size`, wrapping to
//! zero when it leaves the buffer. Each batch is smoothed independently; no
//! cross-batch context is used, so a small discontinuity at batch boundaries
//! is visible in the displayed trace. That is a deliberate simplification,
//! not a defect to paper over.
//!
//! The physical transport (a serial line, an ADC, a socket) and the drawing
//! backend are external collaborators behind the [`prelude::SampleSource`],
//! [`prelude::FrameClock`], and [`prelude::Renderer`] traits. The core never
//! blocks: a fetch either yields a sample immediately or fails transiently,
//! and a failed fetch simply skips the tick.
//!
//! ## Quick Start
//!
//! ```rust
//! use savgol_scope::prelude::*;
//!
//! // A synthetic source standing in for a serial line.
//! let mut t = 0usize;
//! let source = FnSource::new(move || {
//!     t += 1;
//!     Ok((t as f64 * 0.05).sin() * 100.0 + 300.0)
//! });
//!
//! let mut scope = Scope::new()
//!     .max_len(40)
//!     .batch_size(10)
//!     .build(source)?;
//!
//! // Normally an external clock drives this at a fixed interval.
//! for _ in 0..20 {
//!     scope.tick();
//! }
//!
//! let trace = scope.snapshot();
//! assert_eq!(trace.len(), 40);
//! assert_eq!(scope.completed_batches(), 2);
//! # Result::<(), ScopeError>::Ok(())
//! ```
//!
//! ## Driven operation
//!
//! ```rust
//! use savgol_scope::prelude::*;
//!
//! let source = FnSource::new(|| Ok(42.0_f64));
//! let mut scope = Scope::new().max_len(20).build(source)?;
//!
//! // Tick 40 times back to back; a wall-clock driver would use
//! // `IntervalClock::from_config(scope.config())` instead.
//! let mut clock = ManualClock::new(40);
//! let mut sink = NullRenderer;
//! scope.run(&mut clock, &mut sink);
//!
//! assert_eq!(scope.completed_batches(), 4);
//! # Result::<(), ScopeError>::Ok(())
//! ```
//!
//! ## Error model
//!
//! * [`prelude::TransientReadError`] — a malformed or missing sample. Handled
//!   inside [`prelude::ScopeController::tick`] by dropping the tick; never
//!   surfaced.
//! * [`prelude::ScopeError`] — invalid configuration or an unreachable
//!   sample source. Fatal before any ticking begins.
//!
//! ## Concurrency
//!
//! The controller is single-threaded and cooperative: ticks are delivered
//! serially by the clock, and rendering happens between ticks on the same
//! timeline, so the display buffer needs no locking. A multi-threaded port
//! must add a guard or double-buffering around the snapshot.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, batch accumulation, display storage.
pub mod primitives;

// Layer 2: Math - filter design and small dense linear algebra.
pub mod math;

// Layer 3: Engine - validation and the tick state machine.
pub mod engine;

// Layer 4: Adapters - external collaborators (sources, clocks, renderers).
pub mod adapters;

// High-level fluent API for building a scope.
mod api;

// Standard scope prelude.
pub mod prelude {
    pub use crate::adapters::clock::{FrameClock, ManualClock};
    pub use crate::adapters::render::{NullRenderer, Renderer};
    pub use crate::adapters::source::{FnSource, SampleSource, SliceSource};
    pub use crate::api::{ScopeBuilder as Scope, ScopeConfig};
    pub use crate::engine::controller::{ScopeController, TickOutcome};
    pub use crate::math::design::SavgolDesign;
    pub use crate::primitives::batch::{BatchAccumulator, BatchStatus};
    pub use crate::primitives::errors::{ScopeError, TransientReadError};
    pub use crate::primitives::ring::RingDisplayBuffer;

    #[cfg(feature = "std")]
    pub use crate::adapters::clock::IntervalClock;
}
