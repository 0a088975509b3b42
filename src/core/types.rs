use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Selector value the public dataset uses for the worldwide aggregate.
pub const GLOBAL_SELECTOR: &str = "all";

/// Geographic selector deciding which dataset and population figure apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Global,
    Country(String),
}

impl Scope {
    #[must_use]
    pub fn country(name: impl Into<String>) -> Self {
        Self::Country(name.into())
    }

    /// Maps a UI selector to a scope: `"all"` (any case) is global,
    /// anything else names a country.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.eq_ignore_ascii_case(GLOBAL_SELECTOR) {
            Self::Global
        } else {
            Self::Country(selector.to_owned())
        }
    }

    /// Path segment used when querying remote resources for this scope.
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::Global => GLOBAL_SELECTOR,
            Self::Country(name) => name,
        }
    }

    #[must_use]
    pub fn is_country(&self) -> bool {
        matches!(self, Self::Country(_))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Cumulative counts keyed by date string, in the order the source sent them.
pub type DatedCounts = IndexMap<String, i64>;

/// The three cumulative series of one scope.
///
/// Keys are not re-sorted: insertion order is treated as chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub cases: DatedCounts,
    #[serde(default)]
    pub deaths: DatedCounts,
    #[serde(default)]
    pub recovered: DatedCounts,
}

impl RawSeries {
    #[must_use]
    pub fn new(cases: DatedCounts, deaths: DatedCounts, recovered: DatedCounts) -> Self {
        Self {
            cases,
            deaths,
            recovered,
        }
    }

    #[must_use]
    pub fn metric(&self, metric: Metric) -> &DatedCounts {
        match metric {
            Metric::Cases => &self.cases,
            Metric::Deaths => &self.deaths,
            Metric::Recovered => &self.recovered,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.deaths.is_empty() && self.recovered.is_empty()
    }
}

/// Population figure used for per-capita normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Population(f64);

impl Population {
    pub fn new(value: f64) -> ChartResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidPopulation(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Population {
    type Error = ChartError;

    fn try_from(value: f64) -> ChartResult<Self> {
        Self::new(value)
    }
}

impl From<Population> for f64 {
    fn from(value: Population) -> Self {
        value.0
    }
}

/// Tracked metric of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cases,
    Deaths,
    Recovered,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cases, Metric::Deaths, Metric::Recovered];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Cases => "Cases",
            Self::Deaths => "Deaths",
            Self::Recovered => "Recovered",
        }
    }
}
