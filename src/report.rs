//! Dashboard-facing report assembly.
//!
//! A detection backend ships one [`AnomalyTimeseries`] bundle per location.
//! This module turns each metric in the bundle into the chartable views:
//! annual means, a trailing moving average, the per-year standout anomalies
//! and an overall trend. Metrics whose series fail validation are skipped
//! with a warning so one bad feed never empties the whole dashboard.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::stats::{linear_trend, TrendEstimate};
use crate::timeseries::{
    annual_series, yearly_significant_anomalies, AnnualSeries, MetricSeries, MovingAverageSeries,
    YearlyAnomalies, DEFAULT_WINDOW,
};

/// Metrics carried by an anomaly bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Precipitation,
    MaxTemperature,
    MinTemperature,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Precipitation,
        MetricKind::MaxTemperature,
        MetricKind::MinTemperature,
    ];

    /// Wire name of the metric, as used for bundle keys.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Precipitation => "precipitation",
            MetricKind::MaxTemperature => "max_temperature",
            MetricKind::MinTemperature => "min_temperature",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Full anomaly bundle for one location, one series per metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomalyTimeseries {
    pub precipitation: MetricSeries,
    pub max_temperature: MetricSeries,
    pub min_temperature: MetricSeries,
}

impl AnomalyTimeseries {
    /// Parses a bundle from its JSON wire form.
    ///
    /// Shape validation happens per metric during aggregation, not here, so
    /// a malformed metric fails its own report instead of the whole bundle.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn series(&self, metric: MetricKind) -> &MetricSeries {
        match metric {
            MetricKind::Precipitation => &self.precipitation,
            MetricKind::MaxTemperature => &self.max_temperature,
            MetricKind::MinTemperature => &self.min_temperature,
        }
    }

    /// All metric series in bundle order.
    pub fn metrics(&self) -> impl Iterator<Item = (MetricKind, &MetricSeries)> {
        MetricKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.series(kind)))
    }
}

/// Knobs for report assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Span of the trailing moving average, in years.
    pub window: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            window: DEFAULT_WINDOW,
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}

/// Derived views of one metric, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    pub metric: MetricKind,
    pub annual: AnnualSeries,
    pub moving_average: MovingAverageSeries,
    pub anomalies: YearlyAnomalies,
    /// Least-squares trend over the annual means, `None` when fewer than
    /// two annual points exist.
    pub trend: Option<TrendEstimate>,
}

impl MetricReport {
    /// Aggregates one metric series into its chartable views.
    pub fn build(
        metric: MetricKind,
        series: &MetricSeries,
        options: &ReportOptions,
    ) -> Result<Self> {
        let annual = annual_series(series)?;
        let moving_average = MovingAverageSeries::trailing(&annual, options.window)?;
        let anomalies = yearly_significant_anomalies(series)?;
        let trend = match linear_trend(&annual.years, &annual.values) {
            Ok(estimate) => Some(estimate),
            Err(Error::InsufficientData(_)) => None,
            Err(err) => return Err(err),
        };

        Ok(MetricReport {
            metric,
            annual,
            moving_average,
            anomalies,
            trend,
        })
    }
}

/// Reports for every metric that aggregated cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateReport {
    pub reports: Vec<MetricReport>,
}

impl ClimateReport {
    /// Builds one report per bundle metric.
    ///
    /// Option errors abort the build; per-metric data errors only drop that
    /// metric, logged at warn level.
    pub fn build(bundle: &AnomalyTimeseries, options: &ReportOptions) -> Result<Self> {
        if options.window == 0 {
            return Err(Error::InvalidInput(
                "Window size must be at least 1".to_string(),
            ));
        }

        let mut reports = Vec::with_capacity(MetricKind::ALL.len());
        for (metric, series) in bundle.metrics() {
            match MetricReport::build(metric, series, options) {
                Ok(report) => reports.push(report),
                Err(err) => warn!("Skipping metric {}: {}", metric, err),
            }
        }
        debug!(
            "Assembled climate report for {} of {} metrics",
            reports.len(),
            MetricKind::ALL.len()
        );

        Ok(ClimateReport { reports })
    }

    pub fn get(&self, metric: MetricKind) -> Option<&MetricReport> {
        self.reports.iter().find(|report| report.metric == metric)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
