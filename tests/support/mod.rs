#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use epichart::api::CancellationToken;
use epichart::core::{DatedCounts, RawSeries, Scope};
use epichart::error::{ChartError, ChartResult};
use epichart::source::{PopulationSource, SeriesSource};

pub fn counts(entries: &[(&str, i64)]) -> DatedCounts {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), *value))
        .collect()
}

/// `{"01-01-2021": 100, "01-02-2021": 150, "01-03-2021": 120}` for every metric.
pub fn sample_series() -> RawSeries {
    let cases = counts(&[("01-01-2021", 100), ("01-02-2021", 150), ("01-03-2021", 120)]);
    let deaths = counts(&[("01-01-2021", 2), ("01-02-2021", 3), ("01-03-2021", 5)]);
    let recovered = counts(&[("01-01-2021", 10), ("01-02-2021", 40), ("01-03-2021", 90)]);
    RawSeries::new(cases, deaths, recovered)
}

pub fn peru_series() -> RawSeries {
    let cases = counts(&[("3/6/20", 1), ("3/7/20", 6), ("3/8/20", 7), ("3/9/20", 9)]);
    let deaths = counts(&[("3/6/20", 0), ("3/7/20", 0), ("3/8/20", 0), ("3/9/20", 1)]);
    let recovered = counts(&[("3/6/20", 0), ("3/7/20", 0), ("3/8/20", 1), ("3/9/20", 1)]);
    RawSeries::new(cases, deaths, recovered)
}

/// In-memory stand-in for both collaborators.
#[derive(Default)]
pub struct FakeSource {
    series: HashMap<Scope, RawSeries>,
    populations: HashMap<Scope, f64>,
    cancel_on_series: Option<CancellationToken>,
    series_calls: AtomicUsize,
    population_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, scope: Scope, series: RawSeries) -> Self {
        self.series.insert(scope, series);
        self
    }

    pub fn with_population(mut self, scope: Scope, population: f64) -> Self {
        self.populations.insert(scope, population);
        self
    }

    /// Fires `token` from inside the series fetch, as if the caller gave up
    /// while the request was in flight.
    pub fn cancelling(mut self, token: CancellationToken) -> Self {
        self.cancel_on_series = Some(token);
        self
    }

    pub fn series_calls(&self) -> usize {
        self.series_calls.load(Ordering::SeqCst)
    }

    pub fn population_calls(&self) -> usize {
        self.population_calls.load(Ordering::SeqCst)
    }
}

impl SeriesSource for FakeSource {
    async fn fetch_series(&self, scope: &Scope) -> ChartResult<RawSeries> {
        self.series_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = &self.cancel_on_series {
            token.cancel();
        }
        self.series
            .get(scope)
            .cloned()
            .ok_or_else(|| ChartError::FetchFailure {
                resource: format!("series for {scope}"),
                reason: "http status 404 Not Found".to_owned(),
            })
    }
}

impl PopulationSource for FakeSource {
    async fn fetch_population(&self, scope: &Scope) -> ChartResult<f64> {
        self.population_calls.fetch_add(1, Ordering::SeqCst);
        self.populations
            .get(scope)
            .copied()
            .ok_or_else(|| ChartError::FetchFailure {
                resource: format!("population for {scope}"),
                reason: "http status 404 Not Found".to_owned(),
            })
    }
}
