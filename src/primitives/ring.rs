//! Rolling display storage.
//!
//! ## Purpose
//!
//! This module holds the fixed-length trace that the renderer redraws. The
//! controller writes smoothed batches into it at a rotating offset; the
//! buffer itself is position-agnostic and conceptually circular only through
//! the controller's offset bookkeeping.
//!
//! ## Design notes
//!
//! * **Allocation**: Cells are allocated once, pre-initialized to the zero
//!   sentinel, and mutated in place for the lifetime of the buffer.
//! * **Truncation**: A write that runs past the end copies only the in-range
//!   prefix and silently discards the remainder. This mirrors slice-assignment
//!   semantics and is an explicit, testable policy rather than an error.
//! * **Snapshot**: Readers get a borrowed view of the whole trace; the buffer
//!   never exposes interior mutability.
//!
//! ## Invariants
//!
//! * The cell count equals `max_len` forever.
//! * `write` never touches cells outside `[offset, offset + values.len())`.
//!
//! ## Non-goals
//!
//! * This module does not track the write offset; that belongs to the controller.
//! * This module does not guard concurrent access; the pipeline is cooperative.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Ring Display Buffer
// ============================================================================

/// Fixed-length trace written at a rotating offset.
#[derive(Debug, Clone)]
pub struct RingDisplayBuffer<T> {
    /// The display cells, exactly `max_len` of them.
    cells: Vec<T>,
}

impl<T: Float> RingDisplayBuffer<T> {
    /// Create a buffer of `max_len` cells, all set to the zero sentinel.
    pub fn new(max_len: usize) -> Self {
        debug_assert!(max_len > 0, "max_len must be positive");
        Self {
            cells: vec![T::zero(); max_len],
        }
    }

    /// Copy `values` into the buffer starting at `offset`.
    ///
    /// If `offset + values.len()` runs past the end, only the in-range prefix
    /// is written; the overflow is discarded without error. A write entirely
    /// out of range is a no-op.
    pub fn write(&mut self, offset: usize, values: &[T]) {
        if offset >= self.cells.len() {
            return;
        }

        let span = values.len().min(self.cells.len() - offset);
        self.cells[offset..offset + span].copy_from_slice(&values[..span]);
    }

    /// A read-only view of the full trace; length always equals `max_len`.
    pub fn snapshot(&self) -> &[T] {
        &self.cells
    }

    /// The fixed display length.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer has zero cells. Always false for a validated scope.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
