use tracing::{debug, trace};

use crate::core::{Population, RawSeries, Scope, ViewKind};
use crate::error::{ChartError, ChartResult};
use crate::source::{PopulationSource, SeriesSource};

use super::validation::validate_chart_data_config;
use super::{CancellationToken, ChartDataConfig, ChartView, DerivedViews, derive_views};

/// Everything one completed scope load produced.
///
/// Built in full before it is published; the engine swaps it in as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    scope: Scope,
    series: RawSeries,
    population: Option<Population>,
    views: DerivedViews,
}

impl EngineState {
    #[must_use]
    pub fn new(
        scope: Scope,
        series: RawSeries,
        population: Option<Population>,
        config: &ChartDataConfig,
    ) -> Self {
        let views = derive_views(&series, population, config);
        Self {
            scope,
            series,
            population,
            views,
        }
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn series(&self) -> &RawSeries {
        &self.series
    }

    #[must_use]
    pub fn population(&self) -> Option<Population> {
        self.population
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.population.is_some()
    }

    #[must_use]
    pub fn views(&self) -> &DerivedViews {
        &self.views
    }

    #[must_use]
    pub fn view(&self, kind: ViewKind) -> &ChartView {
        self.views.get(kind)
    }
}

/// Session facade: loads a scope through the two collaborators and serves
/// the derived views to the presentation layer.
///
/// `load_scope` takes `&mut self`, so loads on one engine can never overlap.
pub struct ChartDataEngine<S, P> {
    series_source: S,
    population_source: P,
    config: ChartDataConfig,
    state: Option<EngineState>,
    current: ViewKind,
}

impl<S: SeriesSource, P: PopulationSource> ChartDataEngine<S, P> {
    pub fn new(
        series_source: S,
        population_source: P,
        config: ChartDataConfig,
    ) -> ChartResult<Self> {
        validate_chart_data_config(&config)?;
        Ok(Self {
            series_source,
            population_source,
            config,
            state: None,
            current: ViewKind::default(),
        })
    }

    /// Fetches `scope` and re-derives every view.
    ///
    /// On any failure the previously published state stays untouched.
    pub async fn load_scope(&mut self, scope: Scope, normalize: bool) -> ChartResult<()> {
        self.load_scope_cancellable(scope, normalize, &CancellationToken::new())
            .await
    }

    /// Like [`Self::load_scope`], checking `cancel` before every fetch and
    /// before publishing.
    pub async fn load_scope_cancellable(
        &mut self,
        scope: Scope,
        normalize: bool,
        cancel: &CancellationToken,
    ) -> ChartResult<()> {
        debug!(scope = %scope, normalize, "loading scope");

        cancel.check()?;
        let series = self.series_source.fetch_series(&scope).await?;
        trace!(
            scope = %scope,
            cases = series.cases.len(),
            "fetched raw series"
        );

        let population = if normalize {
            cancel.check()?;
            let raw = self.population_source.fetch_population(&scope).await?;
            Some(Population::new(raw)?)
        } else {
            None
        };

        cancel.check()?;
        let state = EngineState::new(scope, series, population, &self.config);
        self.state = Some(state);
        debug!(current = %self.current, "published scope state");
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ChartDataConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> Option<&EngineState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn scope(&self) -> Option<&Scope> {
        self.state.as_ref().map(EngineState::scope)
    }

    /// Raw series of the last completed load.
    #[must_use]
    pub fn raw_series(&self) -> Option<&RawSeries> {
        self.state.as_ref().map(EngineState::series)
    }

    #[must_use]
    pub fn population(&self) -> Option<Population> {
        self.state.as_ref().and_then(EngineState::population)
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.state.as_ref().is_some_and(EngineState::is_normalized)
    }

    #[must_use]
    pub fn current_kind(&self) -> ViewKind {
        self.current
    }

    pub fn current_view(&self) -> ChartResult<&ChartView> {
        let state = self.loaded()?;
        Ok(state.view(self.current))
    }

    /// Moves one step forward in the cyclic view order.
    pub fn advance_view(&mut self) -> ChartResult<&ChartView> {
        let state = self.state.as_ref().ok_or(ChartError::UninitializedState)?;
        self.current = self.current.next();
        trace!(current = %self.current, "advanced view");
        Ok(state.view(self.current))
    }

    /// Moves one step backward in the cyclic view order.
    pub fn retreat_view(&mut self) -> ChartResult<&ChartView> {
        let state = self.state.as_ref().ok_or(ChartError::UninitializedState)?;
        self.current = self.current.previous();
        trace!(current = %self.current, "retreated view");
        Ok(state.view(self.current))
    }

    pub fn select_view_kind(&mut self, kind: ViewKind) -> ChartResult<&ChartView> {
        let state = self.state.as_ref().ok_or(ChartError::UninitializedState)?;
        self.current = kind;
        Ok(state.view(kind))
    }

    /// Selects a view by its wire name and returns it as JSON.
    ///
    /// Unknown names fail with [`ChartError::UnknownView`]; the pointer only
    /// moves on success.
    pub fn select_view(&mut self, name: &str) -> ChartResult<String> {
        let kind: ViewKind = name.parse()?;
        self.select_view_kind(kind)?.to_json()
    }

    fn loaded(&self) -> ChartResult<&EngineState> {
        self.state.as_ref().ok_or(ChartError::UninitializedState)
    }
}
