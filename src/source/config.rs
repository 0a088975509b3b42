use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::core::Scope;
use crate::error::{ChartError, ChartResult};

/// Bytes escaped in a URL path segment (the WHATWG path set plus `/` and `%`).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Endpoints and limits of the public historical dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSourceConfig {
    #[serde(default = "default_historical_base_url")]
    pub historical_base_url: String,
    #[serde(default = "default_days_param")]
    pub days_param: String,
    #[serde(default = "default_global_population_url")]
    pub global_population_url: String,
    #[serde(default = "default_country_population_base_url")]
    pub country_population_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            historical_base_url: default_historical_base_url(),
            days_param: default_days_param(),
            global_population_url: default_global_population_url(),
            country_population_base_url: default_country_population_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpSourceConfig {
    /// Points every endpoint at `base` (e.g. a local mirror), keeping the
    /// public API's path layout.
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.historical_base_url = format!("{base}/historical/");
        self.global_population_url = format!("{base}/all");
        self.country_population_base_url = format!("{base}/countries/");
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Historical series URL, e.g. `.../historical/all?lastdays=all`.
    ///
    /// The selector is percent-encoded as a single path segment.
    #[must_use]
    pub fn series_url(&self, scope: &Scope) -> String {
        format!(
            "{}{}?{}",
            self.historical_base_url,
            utf8_percent_encode(scope.selector(), PATH_SEGMENT),
            self.days_param
        )
    }

    #[must_use]
    pub fn population_url(&self, scope: &Scope) -> String {
        match scope {
            Scope::Global => self.global_population_url.clone(),
            Scope::Country(name) => format!(
                "{}{}",
                self.country_population_base_url,
                utf8_percent_encode(name, PATH_SEGMENT)
            ),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize source config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse source config: {e}")))
    }
}

fn default_historical_base_url() -> String {
    "https://disease.sh/v3/covid-19/historical/".to_owned()
}

fn default_days_param() -> String {
    "lastdays=all".to_owned()
}

fn default_global_population_url() -> String {
    "https://disease.sh/v3/covid-19/all".to_owned()
}

fn default_country_population_base_url() -> String {
    "https://disease.sh/v3/covid-19/countries/".to_owned()
}

fn default_timeout_secs() -> u64 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_public_api_urls() {
        let config = HttpSourceConfig::default();
        assert_eq!(
            config.series_url(&Scope::Global),
            "https://disease.sh/v3/covid-19/historical/all?lastdays=all"
        );
        assert_eq!(
            config.series_url(&Scope::country("Peru")),
            "https://disease.sh/v3/covid-19/historical/Peru?lastdays=all"
        );
        assert_eq!(
            config.population_url(&Scope::Global),
            "https://disease.sh/v3/covid-19/all"
        );
        assert_eq!(
            config.population_url(&Scope::country("Peru")),
            "https://disease.sh/v3/covid-19/countries/Peru"
        );
    }

    #[test]
    fn rebases_every_endpoint() {
        let config = HttpSourceConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            config.series_url(&Scope::Global),
            "http://127.0.0.1:8080/historical/all?lastdays=all"
        );
        assert_eq!(
            config.population_url(&Scope::country("Chile")),
            "http://127.0.0.1:8080/countries/Chile"
        );
    }

    #[test]
    fn country_names_are_encoded_as_one_path_segment() {
        let config = HttpSourceConfig::default();
        let scope = Scope::country("Bosnia?and#Herz/egovina");
        assert_eq!(
            config.series_url(&scope),
            "https://disease.sh/v3/covid-19/historical/Bosnia%3Fand%23Herz%2Fegovina?lastdays=all"
        );
        assert_eq!(
            config.population_url(&scope),
            "https://disease.sh/v3/covid-19/countries/Bosnia%3Fand%23Herz%2Fegovina"
        );
        assert_eq!(
            config.population_url(&Scope::country("Côte d'Ivoire")),
            "https://disease.sh/v3/covid-19/countries/C%C3%B4te%20d'Ivoire"
        );
    }

    #[test]
    fn json_without_fields_uses_defaults() {
        let config = HttpSourceConfig::from_json_str("{}").expect("parse config");
        assert_eq!(config, HttpSourceConfig::default());
    }
}
