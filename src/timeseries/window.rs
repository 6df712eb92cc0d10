//! Trailing moving averages over annual series.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::na::NA;
use crate::timeseries::annual::AnnualSeries;

/// Default smoothing span, in years.
pub const DEFAULT_WINDOW: usize = 10;

/// Trailing moving average of an annual series.
///
/// Dense form: only years with a complete window behind them appear, so a
/// series of `n` years smoothed over `w` keeps its last `n - w + 1` years
/// (none when `w > n`). For the gap-preserving form see [`trailing_mean`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageSeries {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
    /// Span the averages were taken over.
    pub window: usize,
}

impl MovingAverageSeries {
    /// Smooths `annual` with a trailing window of `window` years.
    pub fn trailing(annual: &AnnualSeries, window: usize) -> Result<Self> {
        let padded = trailing_mean(&annual.values, window)?;

        let mut years = Vec::new();
        let mut values = Vec::new();
        for (&year, mean) in annual.years.iter().zip(padded) {
            if let NA::Value(v) = mean {
                years.push(year);
                values.push(v);
            }
        }

        Ok(MovingAverageSeries {
            years,
            values,
            window,
        })
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Trailing mean of `values` over a fixed `window`.
///
/// The output is index-aligned with the input: position `i` averages the
/// window ending at `i`, and positions with fewer than `window` elements
/// behind them (inclusive) are `NA`. A window of zero is rejected.
pub fn trailing_mean(values: &[f64], window: usize) -> Result<Vec<NA<f64>>> {
    if window == 0 {
        return Err(Error::InvalidInput(
            "Window size must be at least 1".to_string(),
        ));
    }

    let mut means = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i + 1 < window {
            means.push(NA::NA);
        } else {
            let start = i + 1 - window;
            let sum: f64 = values[start..=i].iter().sum();
            means.push(NA::Value(sum / window as f64));
        }
    }
    Ok(means)
}
