//! Sample sources.
//!
//! ## Purpose
//!
//! This module defines the contract the core consumes samples through, plus
//! in-memory sources for tests, replays, and synthetic signals. The physical
//! transport (the original system read a serial line) lives behind this
//! trait and stays out of the core.
//!
//! ## Design notes
//!
//! * **Non-blocking**: `fetch` either returns a sample immediately or fails
//!   with a [`TransientReadError`]; it never blocks the tick.
//! * **Startup check**: `open` runs once before any ticking and is the only
//!   place a source failure is fatal ([`ScopeError::SourceUnavailable`]).
//! * **Release**: Sources are released by `Drop`; implementations owning a
//!   real handle close it there, so the resource is returned on every exit
//!   path, including abrupt stops.
//!
//! ## Key concepts
//!
//! * **Drop-and-continue**: A transient failure costs one tick, nothing more.
//!   The controller drops the tick and fetches again on the next one.
//!
//! ## Non-goals
//!
//! * Framing, units, or timestamps; a sample is one bare number.
//! * Buffering or readahead; one sample per fetch.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::{ScopeError, TransientReadError};

// ============================================================================
// Sample Source Trait
// ============================================================================

/// Produces one sample per call.
pub trait SampleSource<T> {
    /// Fetch the next sample.
    ///
    /// A malformed or missing reading is a [`TransientReadError`]; the
    /// controller drops that tick and carries on.
    fn fetch(&mut self) -> Result<T, TransientReadError>;

    /// One-time startup check, invoked by the builder before any ticking.
    ///
    /// Sources backed by a real transport verify the connection here and
    /// report [`ScopeError::SourceUnavailable`] on failure. The default is a
    /// no-op for sources that cannot fail to open.
    fn open(&mut self) -> Result<(), ScopeError> {
        Ok(())
    }
}

impl<T, S: SampleSource<T> + ?Sized> SampleSource<T> for &mut S {
    fn fetch(&mut self) -> Result<T, TransientReadError> {
        (**self).fetch()
    }

    fn open(&mut self) -> Result<(), ScopeError> {
        (**self).open()
    }
}

// ============================================================================
// Slice Source
// ============================================================================

/// Replays a recorded sequence of samples.
///
/// Once the recording is exhausted, every further fetch fails transiently,
/// which the controller treats as dropped ticks. Useful for deterministic
/// replays and tests.
#[derive(Debug, Clone)]
pub struct SliceSource<T> {
    samples: Vec<T>,
    cursor: usize,
}

impl<T: Copy> SliceSource<T> {
    /// Create a source that replays `samples` in order.
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Samples not yet fetched.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.cursor
    }
}

impl<T: Copy> SampleSource<T> for SliceSource<T> {
    fn fetch(&mut self) -> Result<T, TransientReadError> {
        match self.samples.get(self.cursor) {
            Some(&sample) => {
                self.cursor += 1;
                Ok(sample)
            }
            None => Err(TransientReadError::new("recording exhausted")),
        }
    }
}

// ============================================================================
// Closure Source
// ============================================================================

/// Adapts a closure into a sample source.
///
/// The closure decides per call whether a sample is available, so flaky
/// transports are easy to model.
#[derive(Debug, Clone)]
pub struct FnSource<F> {
    fetch: F,
}

impl<F> FnSource<F> {
    /// Create a source backed by `fetch`.
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

impl<T, F> SampleSource<T> for FnSource<F>
where
    F: FnMut() -> Result<T, TransientReadError>,
{
    fn fetch(&mut self) -> Result<T, TransientReadError> {
        (self.fetch)()
    }
}
