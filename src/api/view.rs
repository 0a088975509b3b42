use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ViewKind;
use crate::error::{ChartError, ChartResult};

/// Chart type tag understood by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

/// One styled value sequence of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default)]
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub datasets: Vec<ChartDataset>,
    pub labels: Vec<String>,
}

/// Rendering-ready projection of one metric.
///
/// Serializes to the `{ type, data: { datasets, labels } }` shape consumed by
/// the chart layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
}

impl ChartView {
    #[must_use]
    pub fn new(chart_type: ChartType, dataset: ChartDataset, labels: Vec<String>) -> Self {
        Self {
            chart_type,
            data: ChartData {
                datasets: vec![dataset],
                labels,
            },
        }
    }

    /// First dataset, if any.
    #[must_use]
    pub fn dataset(&self) -> Option<&ChartDataset> {
        self.data.datasets.first()
    }

    /// Values of the first dataset; empty when the view carries none.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.dataset()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart view: {e}")))
    }
}

/// The six derived views, indexed by [`ViewKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedViews {
    views: [ChartView; ViewKind::COUNT],
}

impl DerivedViews {
    pub(crate) fn from_array(views: [ChartView; ViewKind::COUNT]) -> Self {
        Self { views }
    }

    #[must_use]
    pub fn get(&self, kind: ViewKind) -> &ChartView {
        &self.views[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewKind, &ChartView)> {
        ViewKind::ALL.into_iter().zip(self.views.iter())
    }

    #[must_use]
    pub fn to_map(&self) -> IndexMap<ViewKind, ChartView> {
        self.iter().map(|(kind, view)| (kind, view.clone())).collect()
    }

    /// Rebuilds the set from a map; every kind must be present.
    pub fn from_map(mut map: IndexMap<ViewKind, ChartView>) -> ChartResult<Self> {
        let mut views = Vec::with_capacity(ViewKind::COUNT);
        for kind in ViewKind::ALL {
            let view = map
                .shift_remove(&kind)
                .ok_or_else(|| ChartError::InvalidData(format!("missing view: {kind}")))?;
            views.push(view);
        }
        let views: [ChartView; ViewKind::COUNT] = views
            .try_into()
            .map_err(|_| ChartError::InvalidData("view set must hold six views".to_owned()))?;
        Ok(Self { views })
    }
}
