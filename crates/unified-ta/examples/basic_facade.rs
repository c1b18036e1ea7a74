//! Basic Facade Usage
//!
//! Builds an OHLCV table, lists the indicators it supports and computes a
//! few of them by name.
//!
//! Run with: `RUST_LOG=debug cargo run --example basic_facade`

#![allow(clippy::cast_precision_loss)]

use tracing_subscriber::EnvFilter;
use unified_ta::frame::{Frame, Series};
use unified_ta::indicator::IndicatorOutput;
use unified_ta::indicators::KamaConfig;
use unified_ta::params::Params;
use unified_ta::{Result, Ta};

fn sample_close(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            100.0 + 0.1 * t + 4.0 * (t * 0.15).sin()
        })
        .collect()
}

fn sample_bars(close: &[f64]) -> Result<Frame> {
    let len = close.len();
    Frame::new(vec![
        ("Open", close.iter().map(|c| c - 0.3).collect()),
        ("High", close.iter().map(|c| c + 1.2).collect()),
        ("Low", close.iter().map(|c| c - 1.2).collect()),
        ("Close", close.to_vec()),
        ("Volume", (0..len).map(|i| 10_000.0 + (i % 7) as f64 * 900.0).collect()),
    ])
}

fn print_tail(label: &str, output: &IndicatorOutput) {
    for name in output.names() {
        if let Some(values) = output.column(name) {
            let tail: Vec<String> = values
                .iter()
                .rev()
                .take(3)
                .rev()
                .map(|v| format!("{v:.4}"))
                .collect();
            println!("   {label:<10} {name:<14} ... {}", tail.join(", "));
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Unified Facade ===");
    println!();

    // Column names are standardized: "Close" becomes "close", and so on.
    let close = sample_close(200);
    let ta = Ta::from_frame(sample_bars(&close)?)?;

    println!("1. Indicators available for a table:");
    for name in ta.available_indicators() {
        println!("   {}", ta.describe(name)?);
    }
    println!();

    println!("2. Defaults:");
    for name in ["AMA", "STOCH_MACD", "VPN"] {
        print_tail(name, &ta.indicator(name, &Params::new())?);
    }
    println!();

    println!("3. Overriding parameters:");
    let params: Params = KamaConfig::default().er_period(5).period(10).into();
    print_tail("KAMA", &ta.indicator("KAMA", &params)?);
    print_tail("ER(open)", &ta.indicator_on("ER", "open", &Params::new().with("period", 5))?);
    println!();

    println!("4. A bare series:");
    let series_ta = Ta::from_series(Series::new("close", close));
    println!("   available: {}", series_ta.available_indicators().join(", "));
    print_tail("MABW", &series_ta.indicator("MABW", &Params::new())?);

    Ok(())
}
