use std::time::Duration;

use tracing::debug;

use crate::core::{RawSeries, Scope};
use crate::error::{ChartError, ChartResult};

use super::{
    HttpSourceConfig, PopulationSource, SeriesSource, parse_population_response,
    parse_series_response,
};

/// HTTP client for the public disease.sh API, serving both collaborator roles.
#[derive(Debug, Clone)]
pub struct DiseaseShClient {
    client: reqwest::Client,
    config: HttpSourceConfig,
}

impl DiseaseShClient {
    pub fn new(config: HttpSourceConfig) -> ChartResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChartError::fetch("http client", e))?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }

    async fn get_body(&self, resource: &str, url: &str) -> ChartResult<String> {
        debug!(resource, url, "requesting");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ChartError::fetch(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::fetch(resource, format!("http status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| ChartError::fetch(resource, e))
    }
}

impl SeriesSource for DiseaseShClient {
    async fn fetch_series(&self, scope: &Scope) -> ChartResult<RawSeries> {
        let url = self.config.series_url(scope);
        let body = self.get_body("historical series", &url).await?;
        parse_series_response(scope, &body)
    }
}

impl PopulationSource for DiseaseShClient {
    async fn fetch_population(&self, scope: &Scope) -> ChartResult<f64> {
        let url = self.config.population_url(scope);
        let body = self.get_body("population", &url).await?;
        parse_population_response(scope, &body)
    }
}
