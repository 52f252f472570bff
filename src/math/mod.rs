//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematics behind the smoothing filter:
//! - Small dense linear algebra (normal-equation inversion)
//! - Savitzky–Golay filter design and batch smoothing
//!
//! These are deterministic building blocks with no pipeline-specific logic.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Small dense matrix utilities.
pub mod linalg;

/// Savitzky–Golay filter design and application.
pub mod design;
