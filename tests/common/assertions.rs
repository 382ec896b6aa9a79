//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons on channel tables.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is
/// greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that one channel of a segment table matches the expected
/// `(x, entry, exit)` triples element-wise.
///
/// # Panics
///
/// Panics if the channel has a different number of entries or any triple
/// differs by more than the default epsilon.
pub fn assert_channel_approx_eq(actual: &[munsell::Segment], expected: &[(f64, f64, f64)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Channels have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    for (i, (segment, &(x, entry, exit))) in actual.iter().zip(expected.iter()).enumerate() {
        for (label, got, want) in [
            ("x", segment.x, x),
            ("entry", segment.entry, entry),
            ("exit", segment.exit, exit),
        ] {
            let diff = (got - want).abs();
            assert!(
                diff <= DEFAULT_EPSILON,
                "Channel differs at index {} ({}): actual = {}, expected = {}",
                i,
                label,
                got,
                want
            );
        }
    }
}
