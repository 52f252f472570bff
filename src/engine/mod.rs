//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the pipeline:
//! - Fail-fast validation of configuration parameters
//! - The per-tick state machine that feeds, smooths, and displays batches
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configuration validation.
pub mod validator;

/// The tick-driven update controller.
pub mod controller;
