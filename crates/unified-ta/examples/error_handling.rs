//! Error Handling Examples
//!
//! Every failure the facade can report, and what to do about it.
//!
//! Run with: `cargo run --example error_handling`

use tracing_subscriber::EnvFilter;
use unified_ta::frame::{Frame, Series};
use unified_ta::params::Params;
use unified_ta::{Error, Ta};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Error Handling Examples ===");
    println!();

    let close: Vec<f64> = (1..=60).map(f64::from).collect();

    // Example 1: Unknown indicator
    println!("1. Unknown Indicator:");
    let ta = Ta::from_series(Series::new("close", close.clone()));
    match ta.indicator("NOPE", &Params::new()) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::UnknownIndicator { name }) => {
            println!("   Caught UnknownIndicator for '{name}' (expected)");
            println!("   Fix: pick one of {}", ta.available_indicators().join(", "));
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 2: Table indicator on a series
    println!("2. Incompatible Indicator:");
    match ta.indicator("VPN", &Params::new()) {
        Ok(_) => println!("   Unexpected success"),
        Err(e @ Error::IncompatibleIndicator { .. }) => {
            println!("   Caught: {e}");
            println!("   Fix: build the facade from an OHLCV table");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 3: Table without volume
    println!("3. Missing Columns:");
    let ohlc = Frame::new(vec![
        ("open", close.clone()),
        ("high", close.iter().map(|c| c + 1.0).collect()),
        ("low", close.iter().map(|c| c - 1.0).collect()),
        ("close", close.clone()),
    ]);
    match ohlc.and_then(Ta::from_frame) {
        Ok(table) => match table.indicator("VPN", &Params::new()) {
            Ok(_) => println!("   Unexpected success"),
            Err(Error::MissingColumns { columns }) => {
                println!("   Caught MissingColumns: {}", columns.join(", "));
                println!("   Fix: add a volume column");
            }
            Err(e) => println!("   Unexpected error: {e}"),
        },
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 4: Parameter problems
    println!("4. Parameters:");
    for params in [
        Params::new().with("lenght", 10),
        Params::new().with("period", 0),
        Params::new().with("period", 2.5),
    ] {
        match ta.indicator("KAMA", &params) {
            Ok(_) => println!("   Unexpected success"),
            Err(e @ (Error::UnknownParameter { .. } | Error::InvalidParameter { .. })) => {
                println!("   Caught: {e}");
            }
            Err(e) => println!("   Unexpected error: {e}"),
        }
    }
    println!();

    // Example 5: Facade construction
    println!("5. Invalid Input:");
    match Ta::new(None, None) {
        Ok(_) => println!("   Unexpected success"),
        Err(e) => println!("   Caught: {e}"),
    }
}
