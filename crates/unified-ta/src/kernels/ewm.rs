//! Exponentially weighted mean parameterized by span.
//!
//! The smoothing factor is `α = 2 / (span + 1)`. Two weighting modes exist:
//!
//! - **adjusted** (`adjust = true`): each output is the weighted average of all
//!   observations so far with weights `(1 - α)^k`, which removes the start-up
//!   bias of a plain recursive filter;
//! - **recursive** (`adjust = false`): `y[i] = (1 - α)·y[i-1] + α·x[i]`, seeded
//!   with the first observation.
//!
//! # NaN Handling
//!
//! Output is NaN until the first non-NaN observation. A NaN observation after
//! that leaves the output at its previous value while the weight of older
//! observations keeps decaying, so the next valid observation counts for more.
//!
//! # Example
//!
//! ```
//! use unified_ta::kernels::ewm::ewm_mean;
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! let adjusted = ewm_mean(&data, 3, true).unwrap();
//! // weights 0.25, 0.5, 1 -> (0.25 + 1.0 + 3.0) / 1.75
//! assert!((adjusted[2] - 4.25 / 1.75).abs() < 1e-12);
//!
//! let recursive = ewm_mean(&data, 3, false).unwrap();
//! assert!((recursive[2] - 2.25).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Computes the exponentially weighted mean of `data` with the given span.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `span` is zero.
pub fn ewm_mean<T: SeriesElement>(data: &[T], span: usize, adjust: bool) -> Result<Vec<T>> {
    if span == 0 {
        return Err(Error::InvalidPeriod {
            period: span,
            reason: "span must be at least 1",
        });
    }

    let alpha = T::span_alpha(span)?;
    let decay = T::one() - alpha;
    let new_weight = if adjust { T::one() } else { alpha };

    let mut output = vec![T::nan(); data.len()];
    let mut weighted = T::nan();
    let mut old_weight = T::one();

    for (i, &value) in data.iter().enumerate() {
        let is_observation = !value.is_nan();

        if weighted.is_nan() {
            if is_observation {
                weighted = value;
                old_weight = T::one();
            }
        } else {
            old_weight = old_weight * decay;
            if is_observation {
                if weighted != value {
                    weighted = (old_weight * weighted + new_weight * value) / (old_weight + new_weight);
                }
                old_weight = if adjust {
                    old_weight + new_weight
                } else {
                    T::one()
                };
            }
        }

        output[i] = weighted;
    }

    Ok(output)
}
