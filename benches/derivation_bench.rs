use chrono::{Duration, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use epichart::api::{ChartDataConfig, derive_views};
use epichart::core::{DatedCounts, Population, RawSeries};
use std::hint::black_box;

fn synthetic_series(days: usize) -> RawSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 22).expect("valid start date");
    let mut total = 0_i64;
    let cases: DatedCounts = (0..days)
        .map(|offset| {
            total += (offset as i64 % 97) * 131;
            let day = start + Duration::days(offset as i64);
            (day.format("%-m/%-d/%y").to_string(), total)
        })
        .collect();
    let deaths = cases
        .iter()
        .map(|(key, value)| (key.clone(), value / 50))
        .collect();
    let recovered = cases
        .iter()
        .map(|(key, value)| (key.clone(), value * 9 / 10))
        .collect();
    RawSeries::new(cases, deaths, recovered)
}

fn bench_derive_views_raw(c: &mut Criterion) {
    let series = synthetic_series(1_200);
    let config = ChartDataConfig::default();

    c.bench_function("derive_views_raw_1200d", |b| {
        b.iter(|| {
            let _ = derive_views(black_box(&series), None, &config);
        })
    });
}

fn bench_derive_views_normalized(c: &mut Criterion) {
    let series = synthetic_series(1_200);
    let config = ChartDataConfig::default();
    let population = Population::new(7_800_000_000.0).expect("valid population");

    c.bench_function("derive_views_per100k_1200d", |b| {
        b.iter(|| {
            let _ = derive_views(black_box(&series), Some(population), &config);
        })
    });
}

criterion_group!(
    benches,
    bench_derive_views_raw,
    bench_derive_views_normalized
);
criterion_main!(benches);
