use crate::error::{ChartError, ChartResult};

use super::ChartDataConfig;

pub(super) fn validate_chart_data_config(config: &ChartDataConfig) -> ChartResult<()> {
    if !config.per_capita_base.is_finite() || config.per_capita_base <= 0.0 {
        return Err(ChartError::InvalidData(
            "per-capita base must be finite and > 0".to_owned(),
        ));
    }

    if config.chart_precision > 12 {
        return Err(ChartError::InvalidData(
            "chart precision must be <= 12".to_owned(),
        ));
    }

    if let Some(threshold) = config.glitch_threshold {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ChartError::InvalidData(
                "glitch threshold must be finite and > 0".to_owned(),
            ));
        }
    }

    for color in [
        &config.series_colors.cases,
        &config.series_colors.deaths,
        &config.series_colors.recovered,
    ] {
        if color.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "series colors must not be empty".to_owned(),
            ));
        }
    }

    Ok(())
}
