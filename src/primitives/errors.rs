//! Error types for scope operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions of the scope pipeline: invalid
//! configuration parameters, an unreachable sample source, and the transient
//! per-tick read failure.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. minimum sizes).
//! * **Two-tier**: [`ScopeError`] is fatal at construction time; [`TransientReadError`]
//!   is recovered locally by skipping the tick and never escapes the controller.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A validated configuration can never produce an error during ticking.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide retry or recovery strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Fatal Error Type
// ============================================================================

/// Error type for scope construction and startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// Display length must be at least 1 cell.
    InvalidMaxLen {
        /// The display length provided.
        got: usize,
    },

    /// Batch size must be large enough to cover the filter window.
    InvalidBatchSize {
        /// The batch size provided.
        got: usize,
        /// Minimum required batch size (the filter window length).
        min: usize,
    },

    /// Filter window must be odd and at least 3 samples wide.
    InvalidFilterWindow {
        /// The window length provided.
        got: usize,
    },

    /// Polynomial degree must be strictly less than the window length.
    InvalidFilterOrder {
        /// The polynomial degree provided.
        order: usize,
        /// The window length it must fit inside.
        window: usize,
    },

    /// Tick interval must be at least 1 millisecond.
    InvalidTickInterval {
        /// The interval provided, in milliseconds.
        got: u64,
    },

    /// Filter design produced singular normal equations.
    ///
    /// Unreachable for parameters that pass validation.
    DegenerateFilter {
        /// The window length.
        window: usize,
        /// The polynomial degree.
        order: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The sample source could not be opened or reached at startup.
    SourceUnavailable(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ScopeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidMaxLen { got } => {
                write!(f, "Invalid max_len: {got} (must be at least 1)")
            }
            Self::InvalidBatchSize { got, min } => {
                write!(
                    f,
                    "Invalid batch_size: {got} (must be at least the filter window {min})"
                )
            }
            Self::InvalidFilterWindow { got } => {
                write!(f, "Invalid filter_window: {got} (must be odd and >= 3)")
            }
            Self::InvalidFilterOrder { order, window } => {
                write!(
                    f,
                    "Invalid filter_order: {order} (must be less than filter_window {window})"
                )
            }
            Self::InvalidTickInterval { got } => {
                write!(f, "Invalid tick_interval_ms: {got} (must be at least 1)")
            }
            Self::DegenerateFilter { window, order } => {
                write!(
                    f,
                    "Filter design is degenerate for window {window}, order {order}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::SourceUnavailable(msg) => {
                write!(f, "Sample source unavailable: {msg}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for ScopeError {}

// ============================================================================
// Transient Read Error
// ============================================================================

/// A malformed or missing sample from the source.
///
/// Returned by [`SampleSource::fetch`](crate::adapters::source::SampleSource::fetch)
/// and consumed inside the controller's tick handler: the tick is dropped,
/// the fill count is left unchanged, and no error is surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientReadError {
    reason: String,
}

impl TransientReadError {
    /// Create a new transient read error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason the read failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for TransientReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Transient read failure: {}", self.reason)
    }
}

#[cfg(feature = "std")]
impl Error for TransientReadError {}
