//! Fixed-capacity batch accumulation.
//!
//! ## Purpose
//!
//! This module collects raw samples into fixed-size batches. The controller
//! feeds it one sample per tick and hands the completed batch to the smoother.
//!
//! ## Design notes
//!
//! * **Allocation**: Storage is allocated once and zeroed on reset, never reallocated.
//! * **Contract**: `accept` requires a non-complete batch; completion is signalled
//!   by the return status, and a reset must intervene before further accepts.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `0 <= fill_count <= batch_size` at all times.
//! * `accept` returns [`BatchStatus::Ready`] exactly when the call brings the
//!   fill count to `batch_size`.
//! * After `reset`, the fill count is 0 and every cell is zero.
//!
//! ## Non-goals
//!
//! * This module does not fetch samples or handle read failures.
//! * This module does not smooth or otherwise transform the batch.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Batch Status
// ============================================================================

/// Result of feeding one sample to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// The batch still has free slots.
    Filling,

    /// The batch is complete and ready to be smoothed.
    Ready,
}

// ============================================================================
// Batch Accumulator
// ============================================================================

/// Collects raw samples into a fixed-size batch.
#[derive(Debug, Clone)]
pub struct BatchAccumulator<T> {
    /// Fixed-capacity sample storage.
    samples: Vec<T>,

    /// Number of slots filled so far.
    fill: usize,
}

impl<T: Float> BatchAccumulator<T> {
    /// Create an accumulator for batches of `batch_size` samples.
    pub fn new(batch_size: usize) -> Self {
        debug_assert!(batch_size > 0, "batch_size must be positive");
        Self {
            samples: vec![T::zero(); batch_size],
            fill: 0,
        }
    }

    /// Store one sample and report whether the batch is now complete.
    ///
    /// Contract: only called while the batch is incomplete. Calling `accept`
    /// on a completed batch is a caller bug; the sample is dropped and
    /// `Ready` is returned again.
    pub fn accept(&mut self, sample: T) -> BatchStatus {
        debug_assert!(
            self.fill < self.samples.len(),
            "accept called on a completed batch without an intervening reset"
        );
        if self.fill == self.samples.len() {
            return BatchStatus::Ready;
        }

        self.samples[self.fill] = sample;
        self.fill += 1;

        if self.fill == self.samples.len() {
            BatchStatus::Ready
        } else {
            BatchStatus::Filling
        }
    }

    /// The completed batch, oldest sample first.
    ///
    /// Contract: only meaningful after `accept` returned [`BatchStatus::Ready`].
    pub fn completed(&self) -> &[T] {
        debug_assert!(self.is_ready(), "batch is not complete");
        &self.samples
    }

    /// Empty the accumulator: fill count to 0, storage zeroed.
    pub fn reset(&mut self) {
        for cell in self.samples.iter_mut() {
            *cell = T::zero();
        }
        self.fill = 0;
    }

    /// Number of slots filled so far.
    pub fn fill_count(&self) -> usize {
        self.fill
    }

    /// The fixed batch size.
    pub fn batch_size(&self) -> usize {
        self.samples.len()
    }

    /// Whether the batch is complete.
    pub fn is_ready(&self) -> bool {
        self.fill == self.samples.len()
    }
}
