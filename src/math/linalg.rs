//! Small dense matrix utilities.
//!
//! ## Purpose
//!
//! This module provides the minimal linear algebra the filter design needs:
//! inversion of the (order + 1) x (order + 1) normal-equation matrix. For a
//! cubic filter this is a 4 x 4 system, so a direct Gauss-Jordan elimination
//! with partial pivoting is both simple and plenty accurate.
//!
//! ## Design notes
//!
//! * **Generics**: Generic over `Float` types.
//! * **Totality**: A singular matrix yields `None`; the caller maps it to a
//!   configuration error.
//!
//! ## Invariants
//!
//! * The input matrix is square.
//! * On success, `invert(m) * m` is the identity up to floating-point error.
//!
//! ## Non-goals
//!
//! * General-purpose or large-scale linear algebra.
//! * Decompositions, eigenvalues, or sparse storage.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Gauss-Jordan Inversion
// ============================================================================

/// Invert a small square matrix by Gauss-Jordan elimination with partial
/// pivoting. Returns `None` if the matrix is singular.
pub fn invert<T: Float>(matrix: &[Vec<T>]) -> Option<Vec<Vec<T>>> {
    let n = matrix.len();
    debug_assert!(
        matrix.iter().all(|row| row.len() == n),
        "matrix must be square"
    );

    // Augmented system [matrix | identity], reduced in place.
    let mut a: Vec<Vec<T>> = matrix.to_vec();
    let mut inv: Vec<Vec<T>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { T::one() } else { T::zero() })
                .collect()
        })
        .collect();

    for col in 0..n {
        // Partial pivoting: largest magnitude entry on or below the diagonal.
        let mut pivot = col;
        for row in (col + 1)..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col] == T::zero() {
            return None;
        }
        a.swap(col, pivot);
        inv.swap(col, pivot);

        // Normalize the pivot row.
        let scale = a[col][col];
        for j in 0..n {
            a[col][j] = a[col][j] / scale;
            inv[col][j] = inv[col][j] / scale;
        }

        // Eliminate the column from every other row.
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row][col];
            if factor == T::zero() {
                continue;
            }
            for j in 0..n {
                let a_pivot = a[col][j];
                let inv_pivot = inv[col][j];
                a[row][j] = a[row][j] - factor * a_pivot;
                inv[row][j] = inv[row][j] - factor * inv_pivot;
            }
        }
    }

    Some(inv)
}

/// Dot product of two equal-length slices.
#[inline]
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "dot product requires equal lengths");
    let mut acc = T::zero();
    for i in 0..a.len() {
        acc = acc + a[i] * b[i];
    }
    acc
}
