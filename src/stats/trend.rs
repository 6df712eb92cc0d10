//! Least-squares trend fitting over year axes

use crate::core::error::{Error, Result};
use crate::stats::TrendEstimate;

/// Internal implementation for fitting a linear trend
pub(crate) fn linear_trend_impl(years: &[i32], values: &[f64]) -> Result<TrendEstimate> {
    if years.len() != values.len() {
        return Err(Error::DimensionMismatch(format!(
            "Data lengths do not match for trend fitting: years={}, values={}",
            years.len(),
            values.len()
        )));
    }

    if years.len() < 2 {
        return Err(Error::InsufficientData(
            "Trend fitting requires at least 2 data points".into(),
        ));
    }

    let n = years.len() as f64;
    let mean_x = years.iter().map(|&y| f64::from(y)).sum::<f64>() / n;
    let mean_y = values.iter().sum::<f64>() / n;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    for (&year, &value) in years.iter().zip(values.iter()) {
        let dx = f64::from(year) - mean_x;
        ss_xy += dx * (value - mean_y);
        ss_xx += dx * dx;
    }

    if ss_xx.abs() < f64::EPSILON {
        return Err(Error::Computation(
            "Trend fitting requires at least 2 distinct years".into(),
        ));
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&year, &value) in years.iter().zip(values.iter()) {
        let predicted = intercept + slope * f64::from(year);
        ss_res += (value - predicted).powi(2);
        ss_tot += (value - mean_y).powi(2);
    }
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    };

    Ok(TrendEstimate {
        slope,
        intercept,
        r_squared,
        per_decade: slope * 10.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() -> Result<()> {
        let years = vec![2000, 2001, 2002, 2003];
        let values = vec![1.0, 3.0, 5.0, 7.0];

        let trend = linear_trend_impl(&years, &values)?;
        assert!((trend.slope - 2.0).abs() < 1e-10);
        assert!((trend.r_squared - 1.0).abs() < 1e-10);
        assert!((trend.per_decade - 20.0).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_intercept_recovers_fitted_values() -> Result<()> {
        let years = vec![1990, 1991, 1992];
        let values = vec![10.0, 11.0, 12.0];

        let trend = linear_trend_impl(&years, &values)?;
        let predicted_1991 = trend.intercept + trend.slope * 1991.0;
        assert!((predicted_1991 - 11.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_flat_series_has_zero_slope_and_r_squared() -> Result<()> {
        let years = vec![2000, 2001, 2002];
        let values = vec![4.2, 4.2, 4.2];

        let trend = linear_trend_impl(&years, &values)?;
        assert!(trend.slope.abs() < 1e-10);
        assert_eq!(trend.r_squared, 0.0);
        Ok(())
    }

    #[test]
    fn test_noisy_series_r_squared_below_one() -> Result<()> {
        let years = vec![2000, 2001, 2002, 2003, 2004];
        let values = vec![1.0, 3.0, 2.0, 5.0, 4.0];

        let trend = linear_trend_impl(&years, &values)?;
        assert!(trend.slope > 0.0);
        assert!(trend.r_squared > 0.0 && trend.r_squared < 1.0);
        Ok(())
    }

    #[test]
    fn test_mismatched_lengths() {
        assert!(matches!(
            linear_trend_impl(&[2000, 2001], &[1.0]),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_single_point_insufficient() {
        assert!(matches!(
            linear_trend_impl(&[2000], &[1.0]),
            Err(Error::InsufficientData(_))
        ));
    }

    #[test]
    fn test_degenerate_year_axis() {
        assert!(matches!(
            linear_trend_impl(&[2000, 2000], &[1.0, 2.0]),
            Err(Error::Computation(_))
        ));
    }
}
