//! Time series aggregation for monthly anomaly data.
//!
//! The raw input is a [`MetricSeries`] of parallel arrays straight off the
//! wire. Everything else here is a derived view over it: annual means,
//! trailing moving averages, per-year significant anomalies and seasonal
//! climatology. All views validate shape and dates before touching values.

pub mod annual;
pub mod anomalies;
pub mod monthly;
pub mod series;
pub mod window;

// Re-exports for convenience
pub use annual::{annual_series, AnnualSeries};
pub use anomalies::{
    yearly_significant_anomalies, AnomalySeverity, SignificantAnomaly, YearlyAnomalies,
};
pub use monthly::{monthly_means, MonthlySeries};
pub use series::{MetricSeries, Observation, DATE_FORMAT};
pub use window::{trailing_mean, MovingAverageSeries, DEFAULT_WINDOW};
