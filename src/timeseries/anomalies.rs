//! Selection of each year's standout significant anomaly.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::na::NA;
use crate::timeseries::series::{MetricSeries, Observation};

/// Severity bands over anomaly z-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
    Extreme,
}

impl AnomalySeverity {
    /// Bands by |z|: 2.5 and above is extreme, then 2.0 high, 1.5 medium.
    pub fn from_z_score(z_score: f64) -> Self {
        let magnitude = z_score.abs();
        if magnitude >= 2.5 {
            AnomalySeverity::Extreme
        } else if magnitude >= 2.0 {
            AnomalySeverity::High
        } else if magnitude >= 1.5 {
            AnomalySeverity::Medium
        } else {
            AnomalySeverity::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnomalySeverity::Low => "low",
            AnomalySeverity::Medium => "medium",
            AnomalySeverity::High => "high",
            AnomalySeverity::Extreme => "extreme",
        }
    }
}

impl fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The standout anomaly of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificantAnomaly {
    pub year: i32,
    pub date: NaiveDate,
    pub anomaly: f64,
    pub z_score: f64,
}

impl SignificantAnomaly {
    pub fn severity(&self) -> AnomalySeverity {
        AnomalySeverity::from_z_score(self.z_score)
    }
}

/// At most one anomaly per year, ascending by year.
///
/// Years in which nothing significant happened simply have no entry; use
/// [`YearlyAnomalies::align_to_years`] to recover a gap-preserving view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyAnomalies {
    pub entries: Vec<SignificantAnomaly>,
}

impl YearlyAnomalies {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignificantAnomaly> {
        self.entries.iter()
    }

    /// The entry for `year`, if any.
    pub fn get(&self, year: i32) -> Option<&SignificantAnomaly> {
        self.entries.iter().find(|entry| entry.year == year)
    }

    /// Anomaly magnitudes lined up against an external year axis.
    ///
    /// Output has one position per element of `years`, `NA` where the year
    /// has no entry. Lets chart layers overlay anomalies on an annual series
    /// without reindexing.
    pub fn align_to_years(&self, years: &[i32]) -> Vec<NA<f64>> {
        let by_year: HashMap<i32, f64> = self
            .entries
            .iter()
            .map(|entry| (entry.year, entry.anomaly))
            .collect();

        years
            .iter()
            .map(|year| by_year.get(year).copied().into())
            .collect()
    }
}

/// Picks each year's most significant anomaly.
///
/// Only observations flagged significant compete. Within a year the largest
/// |z-score| wins, and a tie keeps the earlier observation, so reruns over
/// the same input always select the same entry. Years with no significant
/// observation get no entry. Empty input yields an empty selection.
pub fn yearly_significant_anomalies(series: &MetricSeries) -> Result<YearlyAnomalies> {
    let observations = series.observations()?;

    let mut best: HashMap<i32, Observation> = HashMap::new();
    for obs in observations {
        if !obs.significant {
            continue;
        }
        let year = obs.date.year();
        match best.get(&year) {
            Some(current) if obs.z_score.abs() <= current.z_score.abs() => {}
            _ => {
                best.insert(year, obs);
            }
        }
    }

    let mut years: Vec<i32> = best.keys().copied().collect();
    years.sort_unstable();

    let entries = years
        .iter()
        .map(|&year| {
            let obs = &best[&year];
            SignificantAnomaly {
                year,
                date: obs.date,
                anomaly: obs.anomaly,
                z_score: obs.z_score,
            }
        })
        .collect();

    Ok(YearlyAnomalies { entries })
}
