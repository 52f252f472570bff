//! Display consumers.
//!
//! ## Purpose
//!
//! This module defines the contract the visualization layer implements. The
//! core exposes no push notifications; the renderer is handed a snapshot of
//! the trace after each driven tick and decides what to do with it.
//!
//! ## Design notes
//!
//! * **Poll model**: The renderer only ever sees a borrowed, read-only view
//!   of the full trace, always `max_len` values long.
//! * **Framework-free**: Nothing here depends on a drawing backend; a real
//!   plot, a terminal sparkline, and a test recorder all fit the same trait.
//!
//! ## Non-goals
//!
//! * Axis scaling, units, or styling; interpretation of the values is
//!   entirely external.

// ============================================================================
// Renderer Trait
// ============================================================================

/// Redraws the display trace.
pub trait Renderer<T> {
    /// Called with the current trace after each driven tick.
    fn render(&mut self, trace: &[T]);
}

impl<T, R: Renderer<T> + ?Sized> Renderer<T> for &mut R {
    fn render(&mut self, trace: &[T]) {
        (**self).render(trace)
    }
}

// ============================================================================
// Null Renderer
// ============================================================================

/// Discards every frame. Handy for headless runs and tests that only care
/// about the pipeline state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl<T> Renderer<T> for NullRenderer {
    fn render(&mut self, _trace: &[T]) {}
}
