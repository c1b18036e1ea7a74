//! OHLCV column-name standardization and sanity checks.
//!
//! Price tables arrive with arbitrary casing and abbreviations (`Close`,
//! `HIGH`, `v`, ...). [`standardize_ohlcv_columns`] maps them onto the
//! canonical lowercase names used by every indicator.
//!
//! | Canonical | Accepted (case-insensitive, trimmed) |
//! |-----------|--------------------------------------|
//! | `open`    | `open`, `o`                          |
//! | `high`    | `high`, `h`                          |
//! | `low`     | `low`, `l`                           |
//! | `close`   | `close`, `c`                         |
//! | `volume`  | `volume`, `vol`, `v`                 |
//!
//! # Example
//!
//! ```
//! use unified_ta::columns::standardize_ohlcv_columns;
//! use unified_ta::frame::Frame;
//!
//! let raw = Frame::new(vec![("Close", vec![1.0]), ("VOL", vec![5.0]), ("sym", vec![0.0])]).unwrap();
//! let std = standardize_ohlcv_columns(&raw).unwrap();
//! let names: Vec<&str> = std.column_names().collect();
//! assert_eq!(names, ["close", "volume", "sym"]);
//! ```

use crate::error::{Error, Result};
use crate::frame::Frame;

/// Canonical OHLCV column names in canonical order.
pub const OHLCV: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// Canonical OHLC column names in canonical order.
pub const OHLC: [&str; 4] = ["open", "high", "low", "close"];

const ALIASES: [(&str, &[&str]); 5] = [
    ("open", &["open", "o"]),
    ("high", &["high", "h"]),
    ("low", &["low", "l"]),
    ("close", &["close", "c"]),
    ("volume", &["volume", "vol", "v"]),
];

/// Returns the canonical name a raw column name maps to, if any.
#[must_use]
pub fn canonical_name(raw: &str) -> Option<&'static str> {
    let key = raw.trim().to_ascii_lowercase();
    ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&key.as_str()))
        .map(|(canonical, _)| *canonical)
}

/// Renames OHLCV-like columns to their canonical lowercase names.
///
/// Columns that are not OHLCV aliases keep their name. Data and index are
/// shared with the input frame.
///
/// # Errors
///
/// Returns `Error::AmbiguousColumn` if two columns map to the same canonical
/// name, and `Error::InvalidInput` if a renamed column collides with an
/// existing non-OHLCV column name.
pub fn standardize_ohlcv_columns(frame: &Frame) -> Result<Frame> {
    for (canonical, _) in ALIASES {
        let sources: Vec<String> = frame
            .column_names()
            .filter(|name| canonical_name(name) == Some(canonical))
            .map(str::to_owned)
            .collect();
        if sources.len() > 1 {
            return Err(Error::AmbiguousColumn { canonical, sources });
        }
    }

    let names: Vec<String> = frame
        .column_names()
        .map(|name| canonical_name(name).map_or_else(|| name.to_owned(), str::to_owned))
        .collect();

    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(Error::invalid_input(format!(
                "column '{name}' appears twice after standardization"
            )));
        }
    }

    Ok(frame.with_column_names(names))
}

/// Checks that a standardized frame is a usable OHLCV table.
///
/// All five canonical columns must exist and `high >= low` must hold on
/// every row where both are finite.
///
/// # Errors
///
/// Returns `Error::MissingColumns` listing every absent column, or
/// `Error::InvalidInput` naming the first row where `high < low`.
pub fn validate_ohlcv(frame: &Frame) -> Result<()> {
    let missing: Vec<String> = OHLCV
        .iter()
        .filter(|name| !frame.contains(name))
        .map(|name| (*name).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns { columns: missing });
    }

    let high = frame.require("high")?;
    let low = frame.require("low")?;
    let inverted = high
        .iter()
        .zip(low)
        .position(|(h, l)| h.is_finite() && l.is_finite() && h < l);
    if let Some(row) = inverted {
        return Err(Error::invalid_input(format!(
            "high is below low at row {row} (index {})",
            frame.index()[row]
        )));
    }

    Ok(())
}
