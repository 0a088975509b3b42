//! Engine facade, derivation rules and the serialized chart contract.

mod cancellation;
mod derivation;
mod engine;
mod engine_config;
mod json_contract;
mod validation;
mod view;

pub use cancellation::CancellationToken;
pub use derivation::{DAILY_BORDER_COLOR, daily_deltas, derive_view, derive_views};
pub use engine::{ChartDataEngine, EngineState};
pub use engine_config::{
    ChartDataConfig, DEFAULT_CHART_PRECISION, DEFAULT_GLITCH_THRESHOLD, DEFAULT_PER_CAPITA_BASE,
    LabelAlignment, SeriesColors,
};
pub use json_contract::{VIEW_SET_JSON_SCHEMA_V1, ViewSetJsonContractV1};
pub use view::{ChartData, ChartDataset, ChartType, ChartView, DerivedViews};
