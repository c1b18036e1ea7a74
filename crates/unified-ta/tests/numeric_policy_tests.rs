//! Numeric policy tests.
//!
//! These pin down the conventions shared by every indicator:
//!
//! - outputs have the input's length and index
//! - warm-up positions are NaN; short input yields all-NaN, never an error
//! - NaN inside a window poisons that window only
//! - zero denominators become NaN, never infinity
//! - recursive filters are deterministic under re-invocation

mod common;

use common::{constant_frame, ohlcv_frame, wave_close};
use unified_ta::kernels::{ewm_mean, rolling_max, rolling_mean, rolling_min, rolling_sum};
use unified_ta::params::Params;
use unified_ta::Ta;

// ==================== Constant Prices ====================

#[test]
fn test_constant_prices_never_raise() {
    let ta = Ta::from_frame(constant_frame(42.0, 80)).unwrap();
    for name in ta.available_indicators() {
        let out = ta.indicator(name, &Params::new()).unwrap();
        for column in out.names() {
            for v in out.column(column).unwrap() {
                assert!(!v.is_infinite(), "{name}/{column} produced {v}");
            }
        }
    }
}

#[test]
fn test_constant_prices_flat_ratios_are_nan() {
    let ta = Ta::from_frame(constant_frame(42.0, 80)).unwrap();

    let er = ta.indicator("ER", &Params::new()).unwrap();
    assert!(er.column("ER").unwrap().iter().all(|v| v.is_nan()));

    let stoch = ta.indicator("STOCH_MACD", &Params::new()).unwrap();
    assert!(stoch.column("STMACD").unwrap().iter().all(|v| v.is_nan()));

    // KAMA falls back to its seed average, which is the constant itself.
    let kama = ta.indicator("KAMA", &Params::new()).unwrap();
    let values = kama.column("KAMA").unwrap();
    assert!(values[19..].iter().all(|v| (*v - 42.0).abs() < 1e-9));

    // AMA holds its seed through a flat range.
    let ama = ta.indicator("AMA", &Params::new()).unwrap();
    assert_eq!(ama.column("AMA10").unwrap()[0], 42.0);
}

#[test]
fn test_constant_prices_vpn_is_zero() {
    let ta = Ta::from_frame(constant_frame(42.0, 80)).unwrap();
    let out = ta.indicator("VPN", &Params::new().with("period", 5)).unwrap();
    let vpn = out.column("VPN").unwrap();
    assert!(vpn[4..].iter().all(|v| v.abs() < 1e-12));
}

// ==================== Short Input ====================

#[test]
fn test_input_shorter_than_window_is_all_nan() {
    let ta = Ta::from_frame(ohlcv_frame(&wave_close(5))).unwrap();
    for name in ["ER", "ATR"] {
        let out = ta.indicator(name, &Params::new()).unwrap();
        assert_eq!(out.len(), 5);
        let column = out.names()[0];
        assert!(out.column(column).unwrap().iter().all(|v| v.is_nan()), "{name}");
    }
}

#[test]
fn test_enormous_window_is_all_nan() {
    let ta = Ta::from_frame(ohlcv_frame(&wave_close(3))).unwrap();
    let huge = 1_000_000_000_000_000_i64;
    let cases = [
        ("MABW", "slow_period", "MAB_LLV"),
        ("STOCH_MACD", "period", "STMACD"),
        ("ATR", "period", "ATR"),
        ("VPN", "period", "VPN"),
        ("ER", "period", "ER"),
        ("KAMA", "period", "KAMA"),
    ];
    for (name, param, column) in cases {
        let out = ta.indicator(name, &Params::new().with(param, huge)).unwrap();
        assert_eq!(out.len(), 3, "{name}");
        assert!(out.column(column).unwrap().iter().all(|v| v.is_nan()), "{name}/{column}");
    }

    // AMA is seeded with the first close, only the recursion is undefined.
    let ama = ta.indicator("AMA", &Params::new().with("period", huge)).unwrap();
    let values = ama.column("AMA1000000000000000").unwrap();
    assert_eq!(values.len(), 3);
    assert!(values[1..].iter().all(|v| v.is_nan()));
}

#[test]
fn test_kernels_accept_short_input() {
    let data: [f64; 2] = [1.0, 2.0];
    assert!(rolling_sum(&data, 5).unwrap().iter().all(|v| v.is_nan()));
    assert!(rolling_mean(&data, 5).unwrap().iter().all(|v| v.is_nan()));
    assert!(rolling_max(&data, 5).unwrap().iter().all(|v| v.is_nan()));
    assert!(rolling_min(&data, 5).unwrap().iter().all(|v| v.is_nan()));
}

#[test]
fn test_kernels_reject_zero_period() {
    assert!(rolling_sum(&[1.0], 0).is_err());
    assert!(rolling_max(&[1.0], 0).is_err());
    assert!(ewm_mean(&[1.0], 0, true).is_err());
}

// ==================== NaN Handling ====================

#[test]
fn test_nan_poisons_rolling_windows_only() {
    let data = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0];
    let mean = rolling_mean(&data, 2).unwrap();
    assert!(mean[2].is_nan());
    assert!(mean[3].is_nan());
    assert_eq!(mean[4], 4.5);
    let max = rolling_max(&data, 2).unwrap();
    assert!(max[3].is_nan());
    assert_eq!(max[5], 6.0);
}

#[test]
fn test_ewm_skips_nan_but_keeps_decaying() {
    let data = [1.0, f64::NAN, 3.0];
    let out = ewm_mean(&data, 3, true).unwrap();
    assert_eq!(out[1], 1.0);
    // alpha = 0.5: the weight of 1.0 decays twice before 3.0 arrives.
    let expected = (0.25 * 1.0 + 3.0) / 1.25;
    assert!((out[2] - expected).abs() < 1e-12);
}

#[test]
fn test_ewm_leading_nan() {
    let out = ewm_mean(&[f64::NAN, f64::NAN, 2.0, 4.0], 1, true).unwrap();
    assert!(out[0].is_nan() && out[1].is_nan());
    assert_eq!(out[2], 2.0);
    assert_eq!(out[3], 4.0);
}

// ==================== Determinism ====================

#[test]
fn test_recursive_filters_are_idempotent() {
    let ta = Ta::from_frame(ohlcv_frame(&wave_close(150))).unwrap();
    for name in ["AMA", "KAMA", "VPN", "STOCH_MACD"] {
        let first = ta.indicator(name, &Params::new()).unwrap();
        let second = ta.indicator(name, &Params::new()).unwrap();
        common::assert_outputs_close(&second, &first, common::EPSILON);
    }
}

#[test]
fn test_outputs_share_input_length() {
    let ta = Ta::from_frame(ohlcv_frame(&wave_close(33))).unwrap();
    for name in ta.available_indicators() {
        assert_eq!(ta.indicator(name, &Params::new()).unwrap().len(), 33, "{name}");
    }
}
