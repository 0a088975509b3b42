use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::types::Metric;
use crate::error::ChartError;

/// One of the six chart projections, in their fixed cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    #[default]
    CumulativeCases,
    CumulativeDeaths,
    CumulativeRecovered,
    DailyCases,
    DailyDeaths,
    DailyRecovered,
}

impl ViewKind {
    pub const COUNT: usize = 6;

    pub const ALL: [ViewKind; Self::COUNT] = [
        ViewKind::CumulativeCases,
        ViewKind::CumulativeDeaths,
        ViewKind::CumulativeRecovered,
        ViewKind::DailyCases,
        ViewKind::DailyDeaths,
        ViewKind::DailyRecovered,
    ];

    /// Position in the cyclic order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::CumulativeCases => 0,
            Self::CumulativeDeaths => 1,
            Self::CumulativeRecovered => 2,
            Self::DailyCases => 3,
            Self::DailyDeaths => 4,
            Self::DailyRecovered => 5,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    #[must_use]
    pub fn metric(self) -> Metric {
        match self {
            Self::CumulativeCases | Self::DailyCases => Metric::Cases,
            Self::CumulativeDeaths | Self::DailyDeaths => Metric::Deaths,
            Self::CumulativeRecovered | Self::DailyRecovered => Metric::Recovered,
        }
    }

    #[must_use]
    pub fn is_cumulative(self) -> bool {
        matches!(
            self,
            Self::CumulativeCases | Self::CumulativeDeaths | Self::CumulativeRecovered
        )
    }

    /// Wire name used by the presentation layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CumulativeCases => "cumulativeCases",
            Self::CumulativeDeaths => "cumulativeDeaths",
            Self::CumulativeRecovered => "cumulativeRecovered",
            Self::DailyCases => "dailyCases",
            Self::DailyDeaths => "dailyDeaths",
            Self::DailyRecovered => "dailyRecovered",
        }
    }

    /// Dataset legend, e.g. `Daily Deaths`.
    #[must_use]
    pub fn dataset_label(self) -> String {
        let prefix = if self.is_cumulative() {
            "Cumulative"
        } else {
            "Daily"
        };
        format!("{prefix} {}", self.metric().title())
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChartError::UnknownView(s.to_owned()))
    }
}
