//! Configuration validation for the scope pipeline.
//!
//! ## Purpose
//!
//! This module checks every configurable parameter before a controller is
//! built. A configuration that passes here makes the smoothing and
//! buffer-write operations total: nothing in the steady-state tick path can
//! fail except a transient sample read.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Centralized**: All parameter constraints live here, not in the types
//!   they constrain.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * Every constraint matches the documented contract of the component it
//!   protects.
//!
//! ## Non-goals
//!
//! * This module does not validate samples; malformed samples are a
//!   transient, per-tick concern.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::ScopeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for scope configuration.
///
/// Provides static methods for validating pipeline parameters. All methods
/// return `Result<(), ScopeError>` and fail fast on the first violation.
pub struct Validator;

impl Validator {
    /// Validate the display buffer length.
    pub fn validate_max_len(max_len: usize) -> Result<(), ScopeError> {
        if max_len == 0 {
            return Err(ScopeError::InvalidMaxLen { got: max_len });
        }
        Ok(())
    }

    /// Validate the filter window length: odd and at least 3.
    pub fn validate_filter_window(window: usize) -> Result<(), ScopeError> {
        if window < 3 || window % 2 == 0 {
            return Err(ScopeError::InvalidFilterWindow { got: window });
        }
        Ok(())
    }

    /// Validate the polynomial degree against the window length.
    pub fn validate_filter_order(order: usize, window: usize) -> Result<(), ScopeError> {
        if order >= window {
            return Err(ScopeError::InvalidFilterOrder { order, window });
        }
        Ok(())
    }

    /// Validate the batch size: a batch must cover the filter window.
    pub fn validate_batch_size(batch_size: usize, window: usize) -> Result<(), ScopeError> {
        if batch_size < window {
            return Err(ScopeError::InvalidBatchSize {
                got: batch_size,
                min: window,
            });
        }
        Ok(())
    }

    /// Validate the tick interval in milliseconds.
    pub fn validate_tick_interval(interval_ms: u64) -> Result<(), ScopeError> {
        if interval_ms == 0 {
            return Err(ScopeError::InvalidTickInterval { got: interval_ms });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ScopeError> {
        if let Some(parameter) = duplicate_param {
            return Err(ScopeError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
