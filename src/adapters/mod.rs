//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer holds the seams to the outside world. The core pipeline only
//! ever talks to these traits:
//!
//! - **Sources**: where samples come from (a serial line, an ADC, a replay)
//! - **Clocks**: what drives ticks (a wall-clock timer, a test harness)
//! - **Renderers**: what redraws the display trace
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample sources and the transient-read contract.
pub mod source;

/// Tick drivers.
pub mod clock;

/// Display consumers.
pub mod render;
