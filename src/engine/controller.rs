//! The tick-driven update controller.
//!
//! ## Purpose
//!
//! This module orchestrates one pipeline step per external clock tick: fetch
//! a sample, feed the batch accumulator, and when the batch completes,
//! smooth it, write it into the display buffer, and advance the rotating
//! write offset.
//!
//! ## Design notes
//!
//! * **State machine**: A tick is either a filling step or a filling step
//!   that completes the batch; the flush (smooth, write, reset, advance)
//!   happens in the same tick the batch completes, so the controller is
//!   always back to filling between ticks.
//! * **Failure semantics**: A transient fetch error drops the tick. The fill
//!   count is unchanged, no error escapes, and the next tick proceeds
//!   normally. There is no error state.
//! * **Offset rule**: After a flush, the offset advances by `batch_size` and
//!   wraps to 0 the moment it leaves `[0, max_len)`. When `max_len` is not a
//!   multiple of `batch_size`, the terminal write of each cycle lands closer
//!   than `batch_size` to the end and is truncated by the display buffer;
//!   the tail of that smoothed batch is discarded. Intentional, testable
//!   behavior inherited from the slice-assignment semantics this pipeline
//!   reproduces.
//! * **Ownership**: The controller exclusively owns the source, accumulator,
//!   filter, and display buffer; renderers only ever see a borrowed snapshot.
//!
//! ## Invariants
//!
//! * `0 <= write_offset < max_len` at the start of every write.
//! * The offset advances only on a successful flush, always by `batch_size`.
//! * No operation in the tick path blocks or suspends.
//!
//! ## Non-goals
//!
//! * Scheduling: ticks arrive from an external [`FrameClock`]; the controller
//!   has no timer of its own and no terminal state.
//! * Concurrency: ticks and renders share one cooperative timeline.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::adapters::clock::FrameClock;
use crate::adapters::render::Renderer;
use crate::adapters::source::SampleSource;
use crate::math::design::SavgolDesign;
use crate::primitives::batch::{BatchAccumulator, BatchStatus};
use crate::primitives::ring::RingDisplayBuffer;

// ============================================================================
// Scope Configuration
// ============================================================================

/// Resolved configuration for a scope pipeline.
///
/// Produced by the builder after validation; every field satisfies its
/// documented constraint by the time a controller exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeConfig {
    /// Display buffer length in cells.
    pub max_len: usize,

    /// Samples per batch.
    pub batch_size: usize,

    /// Savitzky–Golay window length (odd, >= 3).
    pub filter_window: usize,

    /// Savitzky–Golay polynomial degree (< window).
    pub filter_order: usize,

    /// Interval between externally driven ticks, in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for ScopeConfig {
    /// The reference configuration: 300-cell display, batches of 10,
    /// a 7-sample cubic filter, 10 ms ticks.
    fn default() -> Self {
        Self {
            max_len: 300,
            batch_size: 10,
            filter_window: 7,
            filter_order: 3,
            tick_interval_ms: 10,
        }
    }
}

// ============================================================================
// Tick Outcome
// ============================================================================

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The sample fetch failed transiently; the tick was dropped.
    Skipped,

    /// A sample was accepted into the current batch.
    Accepted,

    /// The sample completed the batch, which was smoothed and displayed.
    Flushed,
}

// ============================================================================
// Scope Controller
// ============================================================================

/// Owns the pipeline and advances it one step per tick.
pub struct ScopeController<T, S> {
    /// The external sample source.
    source: S,

    /// The batch being filled.
    accumulator: BatchAccumulator<T>,

    /// The precomputed smoothing filter.
    filter: SavgolDesign<T>,

    /// The rolling display trace.
    display: RingDisplayBuffer<T>,

    /// Where the next smoothed batch lands in the display.
    write_offset: usize,

    /// Reusable output buffer for smoothed batches.
    scratch: Vec<T>,

    /// Resolved configuration.
    config: ScopeConfig,

    /// Ticks observed so far, including dropped ones.
    ticks: u64,

    /// Ticks dropped to transient read failures.
    skipped: u64,

    /// Batches flushed into the display.
    flushed: u64,
}

impl<T: core::fmt::Debug, S> core::fmt::Debug for ScopeController<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScopeController")
            .field("accumulator", &self.accumulator)
            .field("filter", &self.filter)
            .field("display", &self.display)
            .field("write_offset", &self.write_offset)
            .field("config", &self.config)
            .field("ticks", &self.ticks)
            .field("skipped", &self.skipped)
            .field("flushed", &self.flushed)
            .finish_non_exhaustive()
    }
}

impl<T: Float, S: SampleSource<T>> ScopeController<T, S> {
    /// Assemble a controller from validated parts. The builder is the only
    /// entry point, so the config is trusted here.
    pub(crate) fn from_parts(config: ScopeConfig, filter: SavgolDesign<T>, source: S) -> Self {
        Self {
            source,
            accumulator: BatchAccumulator::new(config.batch_size),
            filter,
            display: RingDisplayBuffer::new(config.max_len),
            write_offset: 0,
            scratch: Vec::with_capacity(config.batch_size),
            config,
            ticks: 0,
            skipped: 0,
            flushed: 0,
        }
    }

    /// Advance the pipeline by one step.
    ///
    /// Fetches one sample. On a transient read failure the tick is dropped
    /// silently. Otherwise the sample joins the current batch, and if that
    /// completes the batch, the flush happens within the same tick: the
    /// batch is smoothed, written at the current offset, the accumulator is
    /// reset, and the offset advances.
    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;

        let sample = match self.source.fetch() {
            Ok(sample) => sample,
            Err(err) => {
                self.skipped += 1;
                trace!("tick {}: dropped ({})", self.ticks, err);
                return TickOutcome::Skipped;
            }
        };

        match self.accumulator.accept(sample) {
            BatchStatus::Filling => {
                trace!(
                    "tick {}: batch fill {}/{}",
                    self.ticks,
                    self.accumulator.fill_count(),
                    self.config.batch_size
                );
                TickOutcome::Accepted
            }
            BatchStatus::Ready => {
                self.flush();
                TickOutcome::Flushed
            }
        }
    }

    /// Smooth the completed batch, display it, and advance the offset.
    fn flush(&mut self) {
        self.filter
            .smooth_into(self.accumulator.completed(), &mut self.scratch);
        self.display.write(self.write_offset, &self.scratch);
        self.accumulator.reset();
        self.flushed += 1;

        let room = self.config.max_len - self.write_offset;
        if room < self.config.batch_size {
            debug!(
                "flush {}: truncated write at offset {} ({} of {} values)",
                self.flushed, self.write_offset, room, self.config.batch_size
            );
        } else {
            debug!(
                "flush {}: wrote batch at offset {}",
                self.flushed, self.write_offset
            );
        }

        self.write_offset += self.config.batch_size;
        if self.write_offset >= self.config.max_len {
            self.write_offset = 0;
        }
    }

    /// Drive the pipeline from a clock, rendering after every tick.
    ///
    /// Runs until the clock stops delivering ticks. Rendering happens
    /// between ticks on the same thread, so the snapshot is never observed
    /// mid-write.
    pub fn run<C: FrameClock, R: Renderer<T>>(&mut self, clock: &mut C, renderer: &mut R) {
        while clock.next_tick() {
            self.tick();
            renderer.render(self.display.snapshot());
        }
    }

    /// The current display trace; length always equals `max_len`.
    pub fn snapshot(&self) -> &[T] {
        self.display.snapshot()
    }

    /// Where the next completed batch will be written.
    pub fn write_offset(&self) -> usize {
        self.write_offset
    }

    /// Samples accumulated toward the current batch.
    pub fn pending_samples(&self) -> usize {
        self.accumulator.fill_count()
    }

    /// Batches flushed into the display so far.
    pub fn completed_batches(&self) -> u64 {
        self.flushed
    }

    /// Ticks dropped to transient read failures so far.
    pub fn dropped_ticks(&self) -> u64 {
        self.skipped
    }

    /// Ticks observed so far, including dropped ones.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Stop ticking and release the sample source to the caller.
    ///
    /// Dropping the controller releases the source the same way; this exists
    /// for callers that want to reuse or explicitly close it.
    pub fn into_source(self) -> S {
        self.source
    }
}
