//! Collaborators that supply raw series and population figures.
//!
//! The engine only sees the two traits below. Retry, caching and rate
//! limiting are the implementor's business.

use std::future::Future;

use crate::core::{RawSeries, Scope};
use crate::error::ChartResult;

mod config;
#[cfg(feature = "http-client")]
mod http;
mod parse;

pub use config::HttpSourceConfig;
#[cfg(feature = "http-client")]
pub use http::DiseaseShClient;
pub use parse::{parse_population_response, parse_series_response};

/// Single-shot fetch of the cumulative series for a scope.
pub trait SeriesSource {
    fn fetch_series(&self, scope: &Scope) -> impl Future<Output = ChartResult<RawSeries>> + Send;
}

/// Single-shot fetch of the population figure for a scope.
pub trait PopulationSource {
    fn fetch_population(&self, scope: &Scope) -> impl Future<Output = ChartResult<f64>> + Send;
}

impl<T: SeriesSource + Sync> SeriesSource for &T {
    fn fetch_series(&self, scope: &Scope) -> impl Future<Output = ChartResult<RawSeries>> + Send {
        (**self).fetch_series(scope)
    }
}

impl<T: PopulationSource + Sync> PopulationSource for &T {
    fn fetch_population(&self, scope: &Scope) -> impl Future<Output = ChartResult<f64>> + Send {
        (**self).fetch_population(scope)
    }
}
