//! High-level API for building a scope.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the pipeline and producing a running-ready
//! [`ScopeController`] bound to a sample source.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the reference defaults for every
//!   parameter (300-cell display, batches of 10, 7/3 filter, 10 ms ticks).
//! * **Validated**: All parameters are checked when `build` is called;
//!   nothing in the steady-state tick path can fail afterwards.
//! * **Startup**: `build` opens the source once; an unreachable source is
//!   fatal here, before any ticking begins.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Scope::new()`.
//! 2. Chain configuration methods (`.max_len()`, `.batch_size()`, ...).
//! 3. Call `.build(source)` to validate and obtain a [`ScopeController`].

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::source::SampleSource;
use crate::engine::controller::ScopeController;
use crate::engine::validator::Validator;
use crate::math::design::SavgolDesign;
use crate::primitives::errors::ScopeError;

// Publicly re-exported types
pub use crate::engine::controller::ScopeConfig;

// ============================================================================
// Scope Builder
// ============================================================================

/// Fluent builder for configuring a scope pipeline.
#[derive(Debug, Clone, Default)]
pub struct ScopeBuilder {
    /// Display buffer length.
    max_len: Option<usize>,

    /// Samples per batch.
    batch_size: Option<usize>,

    /// Savitzky–Golay window length.
    filter_window: Option<usize>,

    /// Savitzky–Golay polynomial degree.
    filter_order: Option<usize>,

    /// Tick interval in milliseconds.
    tick_interval_ms: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl ScopeBuilder {
    /// Create a new builder with the reference defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display buffer length (default 300).
    pub fn max_len(mut self, max_len: usize) -> Self {
        if self.max_len.is_some() {
            self.duplicate_param = Some("max_len");
        }
        self.max_len = Some(max_len);
        self
    }

    /// Set the batch size (default 10).
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        if self.batch_size.is_some() {
            self.duplicate_param = Some("batch_size");
        }
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the filter window length (default 7; must be odd and >= 3).
    pub fn filter_window(mut self, window: usize) -> Self {
        if self.filter_window.is_some() {
            self.duplicate_param = Some("filter_window");
        }
        self.filter_window = Some(window);
        self
    }

    /// Set the filter polynomial degree (default 3; must be < window).
    pub fn filter_order(mut self, order: usize) -> Self {
        if self.filter_order.is_some() {
            self.duplicate_param = Some("filter_order");
        }
        self.filter_order = Some(order);
        self
    }

    /// Set the tick interval in milliseconds (default 10).
    pub fn tick_interval_ms(mut self, interval_ms: u64) -> Self {
        if self.tick_interval_ms.is_some() {
            self.duplicate_param = Some("tick_interval_ms");
        }
        self.tick_interval_ms = Some(interval_ms);
        self
    }

    /// Resolve the configuration without building a controller.
    pub fn config(&self) -> ScopeConfig {
        let defaults = ScopeConfig::default();
        ScopeConfig {
            max_len: self.max_len.unwrap_or(defaults.max_len),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            filter_window: self.filter_window.unwrap_or(defaults.filter_window),
            filter_order: self.filter_order.unwrap_or(defaults.filter_order),
            tick_interval_ms: self.tick_interval_ms.unwrap_or(defaults.tick_interval_ms),
        }
    }

    /// Validate the configuration, open the source, and build the controller.
    ///
    /// Fails with a [`ScopeError`] on any invalid parameter or if the source
    /// cannot be opened. After this succeeds, only transient read failures
    /// can occur, and those never surface.
    pub fn build<T, S>(self, mut source: S) -> Result<ScopeController<T, S>, ScopeError>
    where
        T: Float,
        S: SampleSource<T>,
    {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = self.config();

        // Validate parameters, cheap constraints first
        Validator::validate_max_len(config.max_len)?;
        Validator::validate_filter_window(config.filter_window)?;
        Validator::validate_filter_order(config.filter_order, config.filter_window)?;
        Validator::validate_batch_size(config.batch_size, config.filter_window)?;
        Validator::validate_tick_interval(config.tick_interval_ms)?;

        // Precompute the smoothing filter
        let filter = SavgolDesign::new(config.filter_window, config.filter_order)?;

        // Startup check: an unreachable source is fatal before any ticking
        source.open()?;

        debug!(
            "scope ready: max_len={} batch_size={} filter={}/{} tick={}ms",
            config.max_len,
            config.batch_size,
            config.filter_window,
            config.filter_order,
            config.tick_interval_ms
        );

        Ok(ScopeController::from_parts(config, filter, source))
    }
}
