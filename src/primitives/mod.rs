//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures of the pipeline and the
//! shared error types. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Fixed-capacity batch accumulation.
pub mod batch;

/// Rolling display storage.
pub mod ring;
