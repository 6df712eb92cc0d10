//! Per-metric anomaly series as delivered by the detection backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Wire format for observation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Monthly anomaly series for a single metric.
///
/// The backend ships one entry per observed month as parallel arrays:
/// `dates` carries ISO `YYYY-MM-DD` strings and every other field must have
/// the same length. Values, anomalies, z-scores and historical averages are
/// taken as-is; this crate never recomputes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub dates: Vec<String>,
    pub anomalies: Vec<f64>,
    pub z_scores: Vec<f64>,
    pub significant: Vec<bool>,
    pub values: Vec<f64>,
    pub historical_avg: Vec<f64>,
}

/// One fully parsed row of a [`MetricSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
    pub anomaly: f64,
    pub z_score: f64,
    pub significant: bool,
    pub historical_avg: f64,
}

impl MetricSeries {
    /// Creates a series from parallel arrays, rejecting mismatched lengths.
    pub fn new(
        dates: Vec<String>,
        anomalies: Vec<f64>,
        z_scores: Vec<f64>,
        significant: Vec<bool>,
        values: Vec<f64>,
        historical_avg: Vec<f64>,
    ) -> Result<Self> {
        let series = MetricSeries {
            dates,
            anomalies,
            z_scores,
            significant,
            values,
            historical_avg,
        };
        series.validate_shape()?;
        Ok(series)
    }

    /// Parses a series from its JSON wire form and validates its shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let series: MetricSeries = serde_json::from_str(json)?;
        series.validate_shape()?;
        Ok(series)
    }

    /// Number of observations, taken from the date axis.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Checks that every array matches the length of `dates`.
    ///
    /// The error names the first offending field. An all-empty series is a
    /// valid shape.
    pub fn validate_shape(&self) -> Result<()> {
        let expected = self.dates.len();
        for (field, found) in [
            ("anomalies", self.anomalies.len()),
            ("z_scores", self.z_scores.len()),
            ("significant", self.significant.len()),
            ("values", self.values.len()),
            ("historical_avg", self.historical_avg.len()),
        ] {
            if found != expected {
                return Err(Error::InconsistentArrayLengths {
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Parses every date strictly as `YYYY-MM-DD`, failing on the first bad
    /// entry with the raw string in the error.
    pub fn parse_dates(&self) -> Result<Vec<NaiveDate>> {
        self.dates
            .iter()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| Error::DateParse {
                    value: raw.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Zips the parallel arrays into parsed rows.
    ///
    /// Validates the shape and all dates up front so aggregation never sees
    /// a partially usable series.
    pub fn observations(&self) -> Result<Vec<Observation>> {
        self.validate_shape()?;
        let dates = self.parse_dates()?;
        Ok(dates
            .into_iter()
            .enumerate()
            .map(|(i, date)| Observation {
                date,
                value: self.values[i],
                anomaly: self.anomalies[i],
                z_score: self.z_scores[i],
                significant: self.significant[i],
                historical_avg: self.historical_avg[i],
            })
            .collect())
    }
}
