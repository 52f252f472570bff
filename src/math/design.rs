//! Savitzky–Golay filter design and application.
//!
//! ## Purpose
//!
//! This module builds the smoothing filter and applies it to completed
//! batches. A Savitzky–Golay filter fits a degree-`order` polynomial by
//! least squares over a sliding window of `window` samples and replaces each
//! sample with the fitted value at its position.
//!
//! ## Design notes
//!
//! * **Precomputed**: Construction precomputes the `window x window` hat
//!   matrix `H = A (A^T A)^{-1} A^T` over centered sample positions. Each row
//!   `H[p]` evaluates the local fit at window position `p`, so smoothing is a
//!   dot product per output sample.
//! * **Edges**: Samples closer than half a window to a batch boundary are
//!   fitted over the nearest full window and evaluated off-center. This is
//!   the standard polynomial edge extrapolation; interior samples use the
//!   familiar symmetric convolution coefficients (row `window / 2`).
//! * **Purity**: `smooth` is deterministic and carries no state between
//!   batches. Each batch is smoothed independently.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Every hat row sums to 1, so constant signals pass through unchanged.
//! * Signals that are polynomials of degree <= `order` are reproduced exactly.
//!
//! ## Non-goals
//!
//! * Derivative estimation or non-uniform sample spacing.
//! * Cross-batch context; the boundary discontinuity between batches is
//!   documented pipeline behavior.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{dot, invert};
use crate::primitives::errors::ScopeError;

// ============================================================================
// Filter Design
// ============================================================================

/// A precomputed Savitzky–Golay smoothing filter.
#[derive(Debug, Clone)]
pub struct SavgolDesign<T> {
    /// Window length (odd, >= 3).
    window: usize,

    /// Polynomial degree (< window).
    order: usize,

    /// Half window, `window / 2`.
    half: usize,

    /// Hat matrix rows: `rows[p][j]` weights window sample `j` when
    /// evaluating the local fit at window position `p`.
    rows: Vec<Vec<T>>,
}

impl<T: Float> SavgolDesign<T> {
    /// Build the filter for the given window length and polynomial degree.
    ///
    /// Callers are expected to have validated the parameters (window odd and
    /// >= 3, order < window); a degenerate design is still reported rather
    /// than panicking.
    pub fn new(window: usize, order: usize) -> Result<Self, ScopeError> {
        debug_assert!(window >= 3 && window % 2 == 1, "window must be odd, >= 3");
        debug_assert!(order < window, "order must be less than window");

        let terms = order + 1;

        // Vandermonde matrix over centered positions -half..=half.
        let half = window / 2;
        let mut vand: Vec<Vec<T>> = Vec::with_capacity(window);
        for p in 0..window {
            let t = T::from(p as isize - half as isize).unwrap();
            let mut row = Vec::with_capacity(terms);
            let mut power = T::one();
            for _ in 0..terms {
                row.push(power);
                power = power * t;
            }
            vand.push(row);
        }

        // Normal equations G = A^T A, then G^{-1}.
        let mut gram: Vec<Vec<T>> = vec![vec![T::zero(); terms]; terms];
        for row in &vand {
            for k in 0..terms {
                for l in 0..terms {
                    gram[k][l] = gram[k][l] + row[k] * row[l];
                }
            }
        }
        let gram_inv = invert(&gram).ok_or(ScopeError::DegenerateFilter { window, order })?;

        // Hat matrix H = A G^{-1} A^T, one row per window position.
        let mut rows: Vec<Vec<T>> = Vec::with_capacity(window);
        for p in 0..window {
            let mut row = Vec::with_capacity(window);
            for j in 0..window {
                let mut h = T::zero();
                for k in 0..terms {
                    for l in 0..terms {
                        h = h + vand[p][k] * gram_inv[k][l] * vand[j][l];
                    }
                }
                row.push(h);
            }
            rows.push(row);
        }

        Ok(Self {
            window,
            order,
            half,
            rows,
        })
    }

    /// Smooth a completed batch, returning a new vector of the same length.
    ///
    /// Precondition: `batch.len() >= window`.
    pub fn smooth(&self, batch: &[T]) -> Vec<T> {
        let mut out = Vec::new();
        self.smooth_into(batch, &mut out);
        out
    }

    /// Smooth a completed batch into a reusable output buffer.
    ///
    /// The buffer is cleared first; capacity is retained across calls so the
    /// steady state allocates nothing.
    pub fn smooth_into(&self, batch: &[T], out: &mut Vec<T>) {
        let n = batch.len();
        debug_assert!(
            n >= self.window,
            "batch length must be at least the filter window"
        );

        out.clear();
        out.reserve(n);

        for i in 0..n {
            // Nearest full window: centered where possible, clamped at the
            // batch boundaries.
            let start = if i <= self.half {
                0
            } else if i + self.half >= n {
                n - self.window
            } else {
                i - self.half
            };

            let row = &self.rows[i - start];
            out.push(dot(row, &batch[start..start + self.window]));
        }
    }

    /// The window length.
    pub fn window(&self) -> usize {
        self.window
    }

    /// The polynomial degree.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The hat-matrix row evaluating the local fit at window position `p`.
    ///
    /// Row `window / 2` holds the classic symmetric convolution coefficients.
    pub fn hat_row(&self, p: usize) -> &[T] {
        &self.rows[p]
    }
}
