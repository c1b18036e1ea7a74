//! Reference value tests.
//!
//! Small inputs with hand-computed expected values, run through the facade
//! so that dispatch, column resolution, and parameter handling are covered
//! together with the arithmetic.

mod common;

use common::{approx_eq, assert_slices_close, EPSILON};
use unified_ta::frame::{Frame, Series};
use unified_ta::kernels::{ewm_mean, rolling_max, rolling_mean, rolling_min};
use unified_ta::params::Params;
use unified_ta::Ta;

const NAN: f64 = f64::NAN;

fn bars(close: &[f64], volume: &[f64]) -> Frame {
    Frame::new(vec![
        ("open", close.to_vec()),
        ("high", close.iter().map(|c| c + 0.5).collect()),
        ("low", close.iter().map(|c| c - 0.5).collect()),
        ("close", close.to_vec()),
        ("volume", volume.to_vec()),
    ])
    .unwrap()
}

#[test]
fn test_er_reference() {
    let ta = Ta::from_series(Series::new("close", vec![1.0, 3.0, 2.0, 3.0, 5.0]));
    let out = ta.indicator("ER", &Params::new().with("period", 3)).unwrap();
    assert_slices_close(out.column("ER").unwrap(), &[NAN, NAN, NAN, 0.5, 0.5], EPSILON);
}

#[test]
fn test_kama_reference() {
    let ta = Ta::from_series(Series::new("close", vec![1.0, 2.0, 4.0, 3.0]));
    let params = Params::new()
        .with("er_period", 1)
        .with("ema_fast", 2)
        .with("ema_slow", 30)
        .with("period", 2);
    let out = ta.indicator("KAMA", &params).unwrap();

    let sc = 4.0 / 9.0;
    let k2 = 1.5 + sc * (4.0 - 1.5);
    let k3 = k2 + sc * (3.0 - k2);
    assert_slices_close(out.column("KAMA").unwrap(), &[NAN, 1.5, k2, k3], EPSILON);
}

#[test]
fn test_tp_and_atr_reference() {
    let frame = Frame::new(vec![
        ("open", vec![9.0, 14.0, 8.0, 9.0]),
        ("high", vec![10.0, 15.0, 9.0, 10.0]),
        ("low", vec![8.0, 13.0, 7.0, 9.0]),
        ("close", vec![9.0, 14.0, 8.0, 9.5]),
    ])
    .unwrap();
    let ta = Ta::from_frame(frame).unwrap();

    let tp = ta.indicator("TP", &Params::new()).unwrap();
    assert_slices_close(
        tp.column("TP").unwrap(),
        &[9.0, 14.0, 8.0, 28.5 / 3.0],
        EPSILON,
    );

    // True range: [2, 6, 7, 2]
    let atr = ta.indicator("ATR", &Params::new().with("period", 2)).unwrap();
    assert_slices_close(atr.column("ATR").unwrap(), &[NAN, 4.0, 6.5, 4.5], EPSILON);
}

#[test]
fn test_vpn_reference() {
    let frame = bars(&[10.0, 11.0, 10.5, 12.0], &[100.0, 200.0, 300.0, 400.0]);
    let ta = Ta::from_frame(frame).unwrap();
    let params = Params::new()
        .with("period", 2)
        .with("ema_period", 1)
        .with("mav_period", 1);
    let out = ta.indicator("VPN", &params).unwrap();

    // mf   = [-, 1, -0.5, 1.5]
    // ATR  = [-, 1.25, 1.25, 1.5], threshold = ATR / 10
    // up   = [0, 200, 0, 400], down = [0, 0, 300, 0]
    // vp   = [-, 200, 200, 400], vn = [-, 0, 300, 300]
    // mav  = [-, 150, 250, 350]
    let expected = [
        NAN,
        200.0 / 150.0 / 2.0 * 100.0,
        -100.0 / 250.0 / 2.0 * 100.0,
        100.0 / 350.0 / 2.0 * 100.0,
    ];
    assert_slices_close(out.column("VPN").unwrap(), &expected, EPSILON);
    assert_slices_close(out.column("MA_VPN").unwrap(), &expected, EPSILON);
}

#[test]
fn test_ama_reference() {
    let frame = Frame::new(vec![
        ("open", vec![10.0, 11.0, 12.0]),
        ("high", vec![11.0, 12.0, 13.0]),
        ("low", vec![9.0, 10.0, 11.0]),
        ("close", vec![10.0, 11.0, 12.0]),
    ])
    .unwrap();
    let ta = Ta::from_frame(frame).unwrap();
    let out = ta.indicator("AMA", &Params::new().with("period", 2)).unwrap();
    let values = out.column("AMA2").unwrap();

    let (fast, slow) = (2.0 / 3.0, 2.0 / 31.0);
    let cst = |m: f64| (m * (fast - slow) + slow).powi(2);
    // i = 1: hh = 12, ll = 9, m = |2 - 1| / 3
    let a1 = 10.0 + cst(1.0 / 3.0) * (11.0 - 10.0);
    // i = 2: hh = 13, ll = 10, m = |2 - 1| / 3
    let a2 = a1 + cst(1.0 / 3.0) * (12.0 - a1);
    assert_slices_close(values, &[10.0, a1, a2], EPSILON);
}

#[test]
fn test_stoch_macd_matches_kernel_composition() {
    let close = common::wave_close(80);
    let frame = common::ohlc_frame(&close);
    let high = frame.column("high").unwrap();
    let low = frame.column("low").unwrap();
    let ta = Ta::from_frame(frame.clone()).unwrap();

    let params = Params::new()
        .with("period", 14)
        .with("fast_period", 5)
        .with("slow_period", 10)
        .with("signal", 4);
    let out = ta.indicator("STOCH_MACD", &params).unwrap();

    let hh = rolling_max(high, 14).unwrap();
    let ll = rolling_min(low, 14).unwrap();
    let fast = ewm_mean(&close, 5, true).unwrap();
    let slow = ewm_mean(&close, 10, true).unwrap();
    let stmacd: Vec<f64> = (0..close.len())
        .map(|i| ((fast[i] - ll[i]) - (slow[i] - ll[i])) / (hh[i] - ll[i]) * 100.0)
        .collect();
    let signal = ewm_mean(&stmacd, 4, true).unwrap();

    assert_slices_close(out.column("STMACD").unwrap(), &stmacd, 1e-9);
    assert_slices_close(out.column("STMACD_SIGNAL").unwrap(), &signal, 1e-9);
}

#[test]
fn test_mabw_matches_kernel_composition() {
    let close = common::wave_close(120);
    let ta = Ta::from_series(Series::new("close", close.clone()));
    let params = Params::new()
        .with("fast_period", 5)
        .with("slow_period", 20)
        .with("multiplier", 2.0);
    let out = ta.indicator("MABW", &params).unwrap();

    let slow = ewm_mean(&close, 20, true).unwrap();
    let fast = ewm_mean(&close, 5, true).unwrap();
    let sq: Vec<f64> = slow.iter().zip(&fast).map(|(s, f)| (s - f).powi(2)).collect();
    let dev: Vec<f64> = rolling_mean(&sq, 5).unwrap().iter().map(|v| v.sqrt() * 2.0).collect();

    assert_slices_close(out.column("MAB_MIDDLE").unwrap(), &fast, EPSILON);
    for i in 0..close.len() {
        let upper = out.column("MAB_UPPER").unwrap()[i];
        let width = out.column("MAB_WIDTH").unwrap()[i];
        assert!(approx_eq(upper, slow[i] + dev[i], 1e-9), "upper at {i}");
        assert!(approx_eq(width, 2.0 * dev[i] / slow[i] * 100.0, 1e-9), "width at {i}");
    }

    let llv = out.column("MAB_LLV").unwrap();
    let width = out.column("MAB_WIDTH").unwrap();
    for i in 23..close.len() {
        let window_min = width[i + 1 - 20..=i].iter().copied().fold(f64::INFINITY, f64::min);
        assert!(approx_eq(llv[i], window_min, 1e-12), "llv at {i}");
    }
}
