//! epichart: chart-ready views over epidemiological time series.
//!
//! Raw cumulative case/death/recovery counts for one scope (the whole world or
//! a single country) are turned into six chart views: cumulative and daily
//! projections of each metric, optionally normalized per 100K inhabitants.
//! Fetching goes through the [`source`] traits; rendering is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod source;
pub mod telemetry;

pub use api::{ChartDataConfig, ChartDataEngine, ChartView};
pub use core::{Scope, ViewKind};
pub use error::{ChartError, ChartResult};
