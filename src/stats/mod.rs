//! Statistics over annual climate series.
//!
//! Descriptive summaries, percentile ranks and least-squares trend fits for
//! the aggregated views, kept deliberately small: anything inferential about
//! the anomalies themselves happens upstream in the detection backend.

// Feature modules
pub mod descriptive;
pub mod trend;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Structure holding descriptive statistics results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of data points
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Standard deviation (unbiased estimator)
    pub std: f64,
    /// Minimum value
    pub min: f64,
    /// 25% quantile
    pub q1: f64,
    /// Median (50% quantile)
    pub median: f64,
    /// 75% quantile
    pub q3: f64,
    /// Maximum value
    pub max: f64,
}

/// Least-squares trend over a year axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    /// Change in value per year
    pub slope: f64,
    /// Fitted value at year zero
    pub intercept: f64,
    /// Coefficient of determination (R²)
    pub r_squared: f64,
    /// Change in value per decade
    pub per_decade: f64,
}

// Public API functions

/// Calculate basic statistics for data
///
/// # Description
/// Computes count, mean, unbiased standard deviation, quartiles and extrema
/// for a numeric slice. Quartiles interpolate linearly between closest
/// ranks. Empty input is an error.
///
/// # Example
/// ```rust
/// use climrs::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let summary = stats::describe(&data).unwrap();
/// assert_eq!(summary.mean, 3.0);
/// assert_eq!(summary.median, 3.0);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    descriptive::describe_impl(data.as_ref())
}

/// Calculate the percentile rank of a value
///
/// # Description
/// Returns the share (0 to 100) of elements in `data` that are less than or
/// equal to `value`. Used to place one year against the historical record.
/// Empty input is an error.
///
/// # Example
/// ```rust
/// use climrs::stats;
///
/// let record = vec![10.0, 20.0, 30.0, 40.0];
/// let rank = stats::percentile_rank(30.0, &record).unwrap();
/// assert_eq!(rank, 75.0);
/// ```
pub fn percentile_rank<T: AsRef<[f64]>>(value: f64, data: T) -> Result<f64> {
    descriptive::percentile_rank_impl(value, data.as_ref())
}

/// Fit a least-squares trend line over years
///
/// # Description
/// Performs ordinary least squares of `values` against `years` and reports
/// slope, intercept, R² and the slope scaled to a per-decade change. Needs
/// at least two points and at least two distinct years.
///
/// # Example
/// ```rust
/// use climrs::stats;
///
/// let years = vec![2000, 2001, 2002];
/// let values = vec![1.0, 2.0, 3.0];
/// let trend = stats::linear_trend(&years, &values).unwrap();
/// assert!((trend.slope - 1.0).abs() < 1e-10);
/// assert!((trend.per_decade - 10.0).abs() < 1e-10);
/// ```
pub fn linear_trend(years: &[i32], values: &[f64]) -> Result<TrendEstimate> {
    trend::linear_trend_impl(years, values)
}
