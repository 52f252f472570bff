//! Tests for Savitzky–Golay filter design and application.
//!
//! These tests verify the mathematical contract of the smoother:
//! - Hat-matrix structure (normalization, symmetry, known coefficients)
//! - Polynomial reproduction up to the filter degree
//! - Length preservation and determinism over batches
//! - The small dense inversion backing the design

use savgol_scope::math::linalg;
use savgol_scope::prelude::*;

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64, what: &str) {
    assert!(
        (a - b).abs() < EPS,
        "{what}: {a} differs from {b} by {}",
        (a - b).abs()
    );
}

// ============================================================================
// Hat Matrix Tests
// ============================================================================

/// Test that every hat row sums to one.
///
/// A row that does not sum to one would scale constant signals.
#[test]
fn test_hat_rows_sum_to_one() {
    let design: SavgolDesign<f64> = SavgolDesign::new(7, 3).unwrap();

    for p in 0..7 {
        let sum: f64 = design.hat_row(p).iter().sum();
        assert_close(sum, 1.0, "hat row sum");
    }
}

/// Test the classic symmetric coefficients of the 7-point cubic filter.
///
/// The center row must equal (-2, 3, 6, 7, 6, 3, -2) / 21.
#[test]
fn test_center_row_matches_known_coefficients() {
    let design: SavgolDesign<f64> = SavgolDesign::new(7, 3).unwrap();
    let expected = [-2.0, 3.0, 6.0, 7.0, 6.0, 3.0, -2.0].map(|c| c / 21.0);

    let center = design.hat_row(3);
    for (j, (&got, &want)) in center.iter().zip(expected.iter()).enumerate() {
        assert_close(got, want, &format!("center coefficient {j}"));
    }
}

/// Test the point symmetry of the hat matrix.
///
/// Fitting is invariant under reversing the window, so
/// H[p][j] == H[w-1-p][w-1-j].
#[test]
fn test_hat_matrix_symmetry() {
    let w = 7;
    let design: SavgolDesign<f64> = SavgolDesign::new(w, 3).unwrap();

    for p in 0..w {
        for j in 0..w {
            assert_close(
                design.hat_row(p)[j],
                design.hat_row(w - 1 - p)[w - 1 - j],
                "hat matrix symmetry",
            );
        }
    }
}

/// Test that a degree-0 design degenerates to the moving average.
#[test]
fn test_order_zero_is_moving_average() {
    let design: SavgolDesign<f64> = SavgolDesign::new(5, 0).unwrap();

    for p in 0..5 {
        for j in 0..5 {
            assert_close(design.hat_row(p)[j], 0.2, "moving-average weight");
        }
    }
}

// ============================================================================
// Smoothing Tests
// ============================================================================

/// Test that output length equals input length.
#[test]
fn test_smooth_preserves_length() {
    let design: SavgolDesign<f64> = SavgolDesign::new(7, 3).unwrap();

    for n in [7, 10, 25, 100] {
        let batch: Vec<f64> = (0..n).map(|i| (i as f64 * 0.3).sin()).collect();
        assert_eq!(
            design.smooth(&batch).len(),
            n,
            "smoothed batch should keep its length"
        );
    }
}

/// Test that smoothing is deterministic.
#[test]
fn test_smooth_is_deterministic() {
    let design: SavgolDesign<f64> = SavgolDesign::new(7, 3).unwrap();
    let batch: Vec<f64> = (0..10).map(|i| (i as f64 * 1.7).cos() * 40.0).collect();

    assert_eq!(
        design.smooth(&batch),
        design.smooth(&batch),
        "same input must give bitwise-identical output"
    );
}

/// Test that a constant signal passes through unchanged.
#[test]
fn test_smooth_constant_passthrough() {
    let design: SavgolDesign<f64> = SavgolDesign::new(7, 3).unwrap();
    let batch = vec![321.5; 10];

    for (i, &v) in design.smooth(&batch).iter().enumerate() {
        assert_close(v, 321.5, &format!("constant sample {i}"));
    }
}

/// Test exact reproduction of a cubic, edges included.
///
/// A degree-3 fit of exact cubic data is the cubic itself, so every output
/// sample, including the off-center edge fits, must match the input.
#[test]
fn test_smooth_reproduces_cubic_exactly() {
    let design: SavgolDesign<f64> = SavgolDesign::new(7, 3).unwrap();
    let cubic = |t: f64| 0.5 * t * t * t - 2.0 * t * t + 3.0 * t + 4.0;
    let batch: Vec<f64> = (0..12).map(|i| cubic(i as f64)).collect();

    let smoothed = design.smooth(&batch);
    for i in 0..batch.len() {
        assert!(
            (smoothed[i] - batch[i]).abs() < 1e-8,
            "cubic sample {i} should be reproduced: got {}, want {}",
            smoothed[i],
            batch[i]
        );
    }
}

/// Test that smooth_into reuses the output buffer.
#[test]
fn test_smooth_into_reuses_buffer() {
    let design: SavgolDesign<f64> = SavgolDesign::new(7, 3).unwrap();
    let batch: Vec<f64> = (0..10).map(|i| i as f64).collect();

    let mut out = Vec::new();
    design.smooth_into(&batch, &mut out);
    let first = out.clone();

    design.smooth_into(&batch, &mut out);
    assert_eq!(out, first, "repeated smoothing into one buffer should agree");
    assert_eq!(out.len(), batch.len());
}

// ============================================================================
// Linear Algebra Tests
// ============================================================================

/// Test inversion of the identity.
#[test]
fn test_invert_identity() {
    let eye = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let inv = linalg::invert(&eye).expect("identity is invertible");
    assert_eq!(inv, eye, "identity should invert to itself");
}

/// Test a known 2x2 inverse.
#[test]
fn test_invert_known_2x2() {
    // [[4, 7], [2, 6]]^-1 = [[0.6, -0.7], [-0.2, 0.4]]
    let m = vec![vec![4.0, 7.0], vec![2.0, 6.0]];
    let inv = linalg::invert(&m).expect("matrix is invertible");

    let expected = [[0.6, -0.7], [-0.2, 0.4]];
    for i in 0..2 {
        for j in 0..2 {
            assert_close(inv[i][j], expected[i][j], "2x2 inverse entry");
        }
    }
}

/// Test that a singular matrix yields None.
#[test]
fn test_invert_singular_returns_none() {
    let m = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    assert!(
        linalg::invert(&m).is_none(),
        "rank-deficient matrix must not invert"
    );
}
