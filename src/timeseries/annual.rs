//! Calendar-year aggregation of monthly observations.

use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::timeseries::series::MetricSeries;

/// Mean value per calendar year, ascending by year.
///
/// `years` and `values` are index-aligned and always the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualSeries {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

impl AnnualSeries {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Mean value for `year`, if the year is covered.
    pub fn value_for(&self, year: i32) -> Option<f64> {
        self.years
            .iter()
            .position(|&y| y == year)
            .map(|i| self.values[i])
    }
}

/// Collapses a monthly series to one mean per calendar year.
///
/// A year's mean covers exactly the observations dated in it, whatever their
/// order in the input. Empty input yields an empty series.
pub fn annual_series(series: &MetricSeries) -> Result<AnnualSeries> {
    let observations = series.observations()?;

    let mut groups: HashMap<i32, Vec<f64>> = HashMap::new();
    for obs in &observations {
        groups.entry(obs.date.year()).or_default().push(obs.value);
    }

    let mut years: Vec<i32> = groups.keys().copied().collect();
    years.sort_unstable();

    let values = years
        .iter()
        .map(|year| {
            let group = &groups[year];
            group.iter().sum::<f64>() / group.len() as f64
        })
        .collect();

    Ok(AnnualSeries { years, values })
}
