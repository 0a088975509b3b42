use serde::{Deserialize, Serialize};

use crate::core::Metric;
use crate::error::{ChartError, ChartResult};

/// Inhabitants per normalized unit (per-100K).
pub const DEFAULT_PER_CAPITA_BASE: f64 = 100_000.0;
/// Decimal digits kept in normalized chart values.
pub const DEFAULT_CHART_PRECISION: u32 = 3;
/// Non-normalized daily deltas at or above this are treated as data glitches.
pub const DEFAULT_GLITCH_THRESHOLD: f64 = 1_000_000.0;

/// How date labels follow daily values dropped by the glitch filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAlignment {
    /// Drop the label paired with each dropped value; lengths always match.
    #[default]
    Aligned,
    /// Keep every label even when values were dropped. Later bars then sit
    /// under the wrong date.
    Unfiltered,
}

/// Fixed color per metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesColors {
    pub cases: String,
    pub deaths: String,
    pub recovered: String,
}

impl SeriesColors {
    #[must_use]
    pub fn for_metric(&self, metric: Metric) -> &str {
        match metric {
            Metric::Cases => &self.cases,
            Metric::Deaths => &self.deaths,
            Metric::Recovered => &self.recovered,
        }
    }
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            cases: "rgba(255, 0, 0, 0.8)".to_owned(),
            deaths: "rgba(255, 255, 255, 0.8)".to_owned(),
            recovered: "rgba(0, 255, 0, 0.8)".to_owned(),
        }
    }
}

/// Derivation settings for [`ChartDataEngine`](super::ChartDataEngine).
///
/// Serializable so host applications can keep chart settings next to their
/// own configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataConfig {
    #[serde(default = "default_per_capita_base")]
    pub per_capita_base: f64,
    #[serde(default = "default_chart_precision")]
    pub chart_precision: u32,
    #[serde(default = "default_glitch_threshold")]
    pub glitch_threshold: Option<f64>,
    #[serde(default)]
    pub label_alignment: LabelAlignment,
    #[serde(default)]
    pub series_colors: SeriesColors,
}

impl Default for ChartDataConfig {
    fn default() -> Self {
        Self {
            per_capita_base: default_per_capita_base(),
            chart_precision: default_chart_precision(),
            glitch_threshold: default_glitch_threshold(),
            label_alignment: LabelAlignment::default(),
            series_colors: SeriesColors::default(),
        }
    }
}

impl ChartDataConfig {
    #[must_use]
    pub fn with_per_capita_base(mut self, base: f64) -> Self {
        self.per_capita_base = base;
        self
    }

    #[must_use]
    pub fn with_chart_precision(mut self, digits: u32) -> Self {
        self.chart_precision = digits;
        self
    }

    /// Sets the daily glitch threshold; `None` disables filtering.
    #[must_use]
    pub fn with_glitch_threshold(mut self, threshold: Option<f64>) -> Self {
        self.glitch_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_label_alignment(mut self, alignment: LabelAlignment) -> Self {
        self.label_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_series_colors(mut self, colors: SeriesColors) -> Self {
        self.series_colors = colors;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_per_capita_base() -> f64 {
    DEFAULT_PER_CAPITA_BASE
}

fn default_chart_precision() -> u32 {
    DEFAULT_CHART_PRECISION
}

fn default_glitch_threshold() -> Option<f64> {
    Some(DEFAULT_GLITCH_THRESHOLD)
}
