//! Seasonal climatology across the full record.

use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::timeseries::series::MetricSeries;

/// Mean value per calendar month (1 through 12), ascending by month.
///
/// Only months that actually occur in the record appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub months: Vec<u32>,
    pub values: Vec<f64>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Averages observations by calendar month across all years.
///
/// A January mean covers every January in the record; useful for seasonal
/// baselines next to the annual views.
pub fn monthly_means(series: &MetricSeries) -> Result<MonthlySeries> {
    let observations = series.observations()?;

    let mut groups: HashMap<u32, Vec<f64>> = HashMap::new();
    for obs in &observations {
        groups.entry(obs.date.month()).or_default().push(obs.value);
    }

    let mut months: Vec<u32> = groups.keys().copied().collect();
    months.sort_unstable();

    let values = months
        .iter()
        .map(|month| {
            let group = &groups[month];
            group.iter().sum::<f64>() / group.len() as f64
        })
        .collect();

    Ok(MonthlySeries { months, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_from(rows: &[(&str, f64)]) -> MetricSeries {
        MetricSeries {
            dates: rows.iter().map(|(d, _)| d.to_string()).collect(),
            anomalies: vec![0.0; rows.len()],
            z_scores: vec![0.0; rows.len()],
            significant: vec![false; rows.len()],
            values: rows.iter().map(|&(_, v)| v).collect(),
            historical_avg: vec![0.0; rows.len()],
        }
    }

    #[test]
    fn test_monthly_means_pool_across_years() -> Result<()> {
        let series = series_from(&[
            ("1995-01-15", 10.0),
            ("1996-01-15", 14.0),
            ("1995-07-15", 30.0),
        ]);

        let monthly = monthly_means(&series)?;
        assert_eq!(monthly.months, vec![1, 7]);
        assert!((monthly.values[0] - 12.0).abs() < 1e-10);
        assert!((monthly.values[1] - 30.0).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_monthly_means_skip_unobserved_months() -> Result<()> {
        let series = series_from(&[("2002-12-15", 5.0)]);
        let monthly = monthly_means(&series)?;

        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly.months, vec![12]);
        Ok(())
    }

    #[test]
    fn test_monthly_means_empty_input() -> Result<()> {
        assert!(monthly_means(&MetricSeries::default())?.is_empty());
        Ok(())
    }
}
