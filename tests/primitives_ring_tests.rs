//! Tests for the rolling display buffer.
//!
//! These tests verify the write/snapshot contract:
//! - Zero-sentinel initialization and fixed length
//! - Verbatim in-range writes that leave other cells untouched
//! - Silent prefix truncation for writes that run past the end

use savgol_scope::prelude::*;

// ============================================================================
// Initialization Tests
// ============================================================================

/// Test that a fresh buffer is all zeros at the configured length.
#[test]
fn test_new_buffer_is_zero_sentinel() {
    let ring: RingDisplayBuffer<f64> = RingDisplayBuffer::new(300);

    assert_eq!(ring.len(), 300, "buffer should have max_len cells");
    assert_eq!(ring.snapshot().len(), 300, "snapshot should cover all cells");
    assert!(
        ring.snapshot().iter().all(|&v| v == 0.0),
        "all cells should start at the zero sentinel"
    );
}

// ============================================================================
// In-Range Write Tests
// ============================================================================

/// Test that an in-range write copies values verbatim.
#[test]
fn test_write_in_range_verbatim() {
    let mut ring = RingDisplayBuffer::new(20);
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];

    ring.write(10, &values);

    let snap = ring.snapshot();
    assert_eq!(&snap[10..15], &values[..], "values should land at offset");
    assert!(
        snap[..10].iter().all(|&v| v == 0.0),
        "cells before the write should be untouched"
    );
    assert!(
        snap[15..].iter().all(|&v| v == 0.0),
        "cells after the write should be untouched"
    );
}

/// Test that a write ending exactly at the last cell is not truncated.
#[test]
fn test_write_to_exact_end() {
    let mut ring = RingDisplayBuffer::new(10);
    let values = [9.0; 4];

    ring.write(6, &values);

    assert_eq!(
        &ring.snapshot()[6..10],
        &values[..],
        "a write ending at max_len should be complete"
    );
}

/// Test that overlapping writes overwrite in place.
#[test]
fn test_overlapping_writes() {
    let mut ring = RingDisplayBuffer::new(10);

    ring.write(0, &[1.0; 6]);
    ring.write(4, &[2.0; 6]);

    let snap = ring.snapshot();
    assert_eq!(&snap[..4], &[1.0; 4], "prefix keeps the first write");
    assert_eq!(&snap[4..10], &[2.0; 6], "overlap takes the second write");
}

// ============================================================================
// Truncation Tests
// ============================================================================

/// Test that an overrunning write copies only the in-range prefix.
#[test]
fn test_write_truncates_overflow() {
    let mut ring = RingDisplayBuffer::new(25);
    let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();

    ring.write(20, &values);

    let snap = ring.snapshot();
    assert_eq!(
        &snap[20..25],
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        "only the first max_len - offset values should be written"
    );
    assert!(
        snap[..20].iter().all(|&v| v == 0.0),
        "the discarded tail must not wrap or spill anywhere"
    );
}

/// Test that a write starting at or past the end is a no-op.
#[test]
fn test_write_fully_out_of_range_is_noop() {
    let mut ring = RingDisplayBuffer::new(8);
    let before: Vec<f64> = ring.snapshot().to_vec();

    ring.write(8, &[5.0; 3]);
    ring.write(100, &[5.0; 3]);

    assert_eq!(ring.snapshot(), &before[..], "out-of-range writes change nothing");
}

/// Test that an empty write changes nothing.
#[test]
fn test_empty_write_is_noop() {
    let mut ring = RingDisplayBuffer::new(8);
    ring.write(0, &[3.0; 8]);
    let before: Vec<f64> = ring.snapshot().to_vec();

    ring.write(4, &[]);

    assert_eq!(ring.snapshot(), &before[..]);
}
