//! Annual aggregation and anomaly reporting over monthly climate series.
//!
//! A detection backend ships, per metric, a monthly series of values with
//! precomputed anomalies, z-scores and significance flags. climrs turns
//! those series into the views a dashboard charts:
//!
//! - annual means over calendar years
//! - trailing moving averages with explicit warm-up gaps
//! - one standout significant anomaly per year
//! - descriptive statistics and least-squares trends
//!
//! Input arrives as parallel arrays and is validated before any aggregation;
//! mismatched shapes and malformed dates fail fast with no partial output,
//! while empty input flows through as empty views.

// Core module with error and result types
pub mod core;

// Typed absence marker for derived series
pub mod na;

// Report assembly over full anomaly bundles
pub mod report;

// Statistics over aggregated series
pub mod stats;

// Aggregation views over monthly anomaly data
pub mod timeseries;

// Re-export core types
pub use crate::core::error::{Error, Result};
pub use crate::na::NA;

// Re-export aggregation views
pub use crate::timeseries::{
    annual_series, monthly_means, trailing_mean, yearly_significant_anomalies, AnnualSeries,
    AnomalySeverity, MetricSeries, MonthlySeries, MovingAverageSeries, Observation,
    SignificantAnomaly, YearlyAnomalies, DATE_FORMAT, DEFAULT_WINDOW,
};

// Re-export statistics
pub use crate::stats::{describe, linear_trend, percentile_rank, DescriptiveStats, TrendEstimate};

// Re-export report assembly
pub use crate::report::{AnomalyTimeseries, ClimateReport, MetricKind, MetricReport, ReportOptions};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
