//! Pure projection of raw cumulative series into the six chart views.
//!
//! Nothing here touches engine state; the same input always yields the same
//! view set, so every rule can be exercised without a data source.

use tracing::{debug, trace};

use crate::core::{
    DatedCounts, Metric, Population, RawSeries, ViewKind, format_date_label, per_capita,
};

use super::{ChartDataConfig, ChartDataset, ChartType, ChartView, DerivedViews, LabelAlignment};

/// Border used by every daily bar dataset.
pub const DAILY_BORDER_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const DAILY_BORDER_WIDTH: u32 = 1;
const DAILY_BAR_THICKNESS: &str = "flex";
const DAILY_FONT_COLOR: &str = "pink";

/// Derives all six views from `series`.
///
/// Normalization is active exactly when `population` is present.
#[must_use]
pub fn derive_views(
    series: &RawSeries,
    population: Option<Population>,
    config: &ChartDataConfig,
) -> DerivedViews {
    let [cases, deaths, recovered] = Metric::ALL.map(|metric| date_labels(series.metric(metric)));
    let views = ViewKind::ALL.map(|kind| {
        let labels = match kind.metric() {
            Metric::Cases => &cases,
            Metric::Deaths => &deaths,
            Metric::Recovered => &recovered,
        };
        project(kind, series, labels.clone(), population, config)
    });
    debug!(
        cases = series.cases.len(),
        deaths = series.deaths.len(),
        recovered = series.recovered.len(),
        normalized = population.is_some(),
        "derived chart views"
    );
    DerivedViews::from_array(views)
}

/// Derives a single view.
#[must_use]
pub fn derive_view(
    kind: ViewKind,
    series: &RawSeries,
    population: Option<Population>,
    config: &ChartDataConfig,
) -> ChartView {
    let labels = date_labels(series.metric(kind.metric()));
    project(kind, series, labels, population, config)
}

/// Chart labels for one metric; the cumulative and daily views share them.
fn date_labels(counts: &DatedCounts) -> Vec<String> {
    counts.keys().map(|key| format_date_label(key)).collect()
}

fn project(
    kind: ViewKind,
    series: &RawSeries,
    labels: Vec<String>,
    population: Option<Population>,
    config: &ChartDataConfig,
) -> ChartView {
    let counts = series.metric(kind.metric());
    if kind.is_cumulative() {
        derive_cumulative(kind, counts, labels, population, config)
    } else {
        derive_daily(kind, counts, labels, population, config)
    }
}

fn derive_cumulative(
    kind: ViewKind,
    counts: &DatedCounts,
    labels: Vec<String>,
    population: Option<Population>,
    config: &ChartDataConfig,
) -> ChartView {
    let data = counts
        .values()
        .map(|&value| scale(value as f64, population, config))
        .collect();

    let color = color_for(kind.metric(), config);
    let dataset = ChartDataset {
        label: kind.dataset_label(),
        data,
        background_color: color.clone(),
        border_color: color,
        border_width: None,
        bar_thickness: None,
        font_color: None,
        fill: false,
    };
    ChartView::new(ChartType::Line, dataset, labels)
}

fn derive_daily(
    kind: ViewKind,
    counts: &DatedCounts,
    labels: Vec<String>,
    population: Option<Population>,
    config: &ChartDataConfig,
) -> ChartView {
    let deltas = daily_deltas(counts.values().copied());

    let (data, labels) = match (population, config.glitch_threshold) {
        (Some(_), _) | (None, None) => (
            deltas
                .into_iter()
                .map(|delta| scale(delta, population, config))
                .collect(),
            labels,
        ),
        // The glitch filter only runs on raw counts; normalized deltas are
        // never dropped.
        (None, Some(threshold)) => {
            filter_glitches(kind, deltas, labels, threshold, config.label_alignment)
        }
    };

    let dataset = ChartDataset {
        label: kind.dataset_label(),
        data,
        background_color: color_for(kind.metric(), config),
        border_color: DAILY_BORDER_COLOR.to_owned(),
        border_width: Some(DAILY_BORDER_WIDTH),
        bar_thickness: Some(DAILY_BAR_THICKNESS.to_owned()),
        font_color: Some(DAILY_FONT_COLOR.to_owned()),
        fill: false,
    };
    ChartView::new(ChartType::Bar, dataset, labels)
}

/// Day-over-day absolute differences; the first entry is measured from zero.
#[must_use]
pub fn daily_deltas(values: impl IntoIterator<Item = i64>) -> Vec<f64> {
    let mut previous = 0_i64;
    values
        .into_iter()
        .map(|value| {
            let delta = value.abs_diff(previous);
            previous = value;
            delta as f64
        })
        .collect()
}

fn filter_glitches(
    kind: ViewKind,
    deltas: Vec<f64>,
    labels: Vec<String>,
    threshold: f64,
    alignment: LabelAlignment,
) -> (Vec<f64>, Vec<String>) {
    let total = deltas.len();
    let (data, labels): (Vec<f64>, Vec<String>) = match alignment {
        LabelAlignment::Aligned => deltas
            .into_iter()
            .zip(labels)
            .filter(|(delta, _)| *delta < threshold)
            .unzip(),
        LabelAlignment::Unfiltered => (
            deltas
                .into_iter()
                .filter(|delta| *delta < threshold)
                .collect(),
            labels,
        ),
    };

    let dropped = total - data.len();
    if dropped > 0 {
        debug!(view = %kind, dropped, threshold, "dropped glitch deltas");
    } else {
        trace!(view = %kind, "no glitch deltas");
    }
    (data, labels)
}

fn scale(value: f64, population: Option<Population>, config: &ChartDataConfig) -> f64 {
    match population {
        Some(population) => per_capita(
            value,
            population.get(),
            config.per_capita_base,
            config.chart_precision,
        ),
        None => value,
    }
}

fn color_for(metric: Metric, config: &ChartDataConfig) -> String {
    config.series_colors.for_metric(metric).to_owned()
}
