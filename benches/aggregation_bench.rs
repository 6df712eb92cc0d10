// Aggregation benchmarks using Criterion
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use climrs::{
    annual_series, yearly_significant_anomalies, AnomalyTimeseries, ClimateReport, MetricKind,
    MetricReport, MetricSeries, ReportOptions,
};

// Deterministic monthly record: twelve observations per year.
fn synthetic_series(years: i32) -> MetricSeries {
    let mut dates = Vec::new();
    let mut values = Vec::new();
    let mut anomalies = Vec::new();
    let mut z_scores = Vec::new();
    let mut significant = Vec::new();

    for year in 0..years {
        for month in 1..=12 {
            dates.push(format!("{:04}-{:02}-15", 1950 + year, month));
            values.push(f64::from(month) + f64::from(year % 7) * 0.3);

            let z = f64::from((year * 12 + month) % 50) / 10.0 - 2.5;
            anomalies.push(z * 0.8);
            z_scores.push(z);
            significant.push(z.abs() >= 1.5);
        }
    }

    let n = dates.len();
    MetricSeries {
        dates,
        anomalies,
        z_scores,
        significant,
        values,
        historical_avg: vec![0.0; n],
    }
}

// Annual means over a 50-year monthly record
fn bench_annual_series(c: &mut Criterion) {
    let series = synthetic_series(50);
    c.bench_function("annual_series_50y", |b| {
        b.iter(|| {
            let annual = annual_series(black_box(&series)).unwrap();
            black_box(annual)
        });
    });
}

// Per-year standout anomaly selection over the same record
fn bench_yearly_anomalies(c: &mut Criterion) {
    let series = synthetic_series(50);
    c.bench_function("yearly_significant_anomalies_50y", |b| {
        b.iter(|| {
            let yearly = yearly_significant_anomalies(black_box(&series)).unwrap();
            black_box(yearly)
        });
    });
}

// Full single-metric report with the default ten-year window
fn bench_metric_report(c: &mut Criterion) {
    let series = synthetic_series(50);
    let options = ReportOptions::default();
    c.bench_function("metric_report_50y", |b| {
        b.iter(|| {
            let report =
                MetricReport::build(MetricKind::Precipitation, black_box(&series), &options)
                    .unwrap();
            black_box(report)
        });
    });
}

// Three-metric bundle report, the whole dashboard path
fn bench_climate_report(c: &mut Criterion) {
    let bundle = AnomalyTimeseries {
        precipitation: synthetic_series(50),
        max_temperature: synthetic_series(50),
        min_temperature: synthetic_series(50),
    };
    let options = ReportOptions::default();
    c.bench_function("climate_report_50y", |b| {
        b.iter(|| {
            let report = ClimateReport::build(black_box(&bundle), &options).unwrap();
            black_box(report)
        });
    });
}

criterion_group!(
    benches,
    bench_annual_series,
    bench_yearly_anomalies,
    bench_metric_report,
    bench_climate_report
);
criterion_main!(benches);
