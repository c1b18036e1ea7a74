//! Shared test utilities for unified-ta tests.
//!
//! This module provides data builders and comparison helpers used across
//! multiple test files.

use unified_ta::frame::Frame;
use unified_ta::indicator::IndicatorOutput;

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Asserts two slices are element-wise approximately equal.
#[allow(dead_code)]
pub fn assert_slices_close(actual: &[f64], expected: &[f64], eps: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(approx_eq(*a, *e, eps), "index {i}: got {a}, expected {e}");
    }
}

/// Asserts two indicator outputs have the same index, names and values,
/// treating NaN as equal to NaN.
#[allow(dead_code)]
pub fn assert_outputs_close(actual: &IndicatorOutput, expected: &IndicatorOutput, eps: f64) {
    assert_eq!(actual.index(), expected.index(), "index mismatch");
    assert_eq!(actual.names(), expected.names(), "schema mismatch");
    for name in expected.names() {
        assert_slices_close(
            actual.column(name).unwrap(),
            expected.column(name).unwrap(),
            eps,
        );
    }
}

/// A deterministic, gently trending and oscillating close series.
#[allow(dead_code)]
pub fn wave_close(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            100.0 + 0.05 * t + 3.0 * (t * 0.21).sin() + 1.5 * (t * 0.05).cos()
        })
        .collect()
}

/// Builds an OHLC frame around `close` with a fixed half-spread.
#[allow(dead_code)]
pub fn ohlc_frame(close: &[f64]) -> Frame {
    Frame::new(vec![
        ("open", close.iter().map(|c| c - 0.2).collect()),
        ("high", close.iter().map(|c| c + 1.0).collect()),
        ("low", close.iter().map(|c| c - 1.0).collect()),
        ("close", close.to_vec()),
    ])
    .unwrap()
}

/// Builds an OHLCV frame around `close` with oscillating volume.
#[allow(dead_code)]
pub fn ohlcv_frame(close: &[f64]) -> Frame {
    let volume: Vec<f64> = (0..close.len())
        .map(|i| 1_000.0 + 250.0 * ((i as f64) * 0.7).sin())
        .collect();
    Frame::new(vec![
        ("open", close.iter().map(|c| c - 0.2).collect()),
        ("high", close.iter().map(|c| c + 1.0).collect()),
        ("low", close.iter().map(|c| c - 1.0).collect()),
        ("close", close.to_vec()),
        ("volume", volume),
    ])
    .unwrap()
}

/// Builds an OHLCV frame where every bar is the same price.
#[allow(dead_code)]
pub fn constant_frame(price: f64, len: usize) -> Frame {
    Frame::new(vec![
        ("open", vec![price; len]),
        ("high", vec![price; len]),
        ("low", vec![price; len]),
        ("close", vec![price; len]),
        ("volume", vec![500.0; len]),
    ])
    .unwrap()
}
