use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Population, Scope, ViewKind};
use crate::error::{ChartError, ChartResult};

use super::{ChartView, DerivedViews, EngineState};

pub const VIEW_SET_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON payload carrying the full derived view set of one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSetJsonContractV1 {
    pub schema_version: u32,
    pub scope: Scope,
    pub population: Option<Population>,
    pub views: IndexMap<ViewKind, ChartView>,
}

impl ViewSetJsonContractV1 {
    #[must_use]
    pub fn from_state(state: &EngineState) -> Self {
        Self {
            schema_version: VIEW_SET_JSON_SCHEMA_V1,
            scope: state.scope().clone(),
            population: state.population(),
            views: state.views().to_map(),
        }
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.population.is_some()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize view set contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse view set json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_SET_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported view set schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }

    /// Rebuilds the typed view set; all six kinds must be present.
    pub fn into_views(self) -> ChartResult<DerivedViews> {
        DerivedViews::from_map(self.views)
    }
}

impl EngineState {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        ViewSetJsonContractV1::from_state(self).to_json_pretty()
    }
}
