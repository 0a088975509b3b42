use serde::Deserialize;

use crate::core::{RawSeries, Scope};
use crate::error::{ChartError, ChartResult};

/// Per-country payload: the three series sit under `timeline`.
#[derive(Debug, Deserialize)]
struct CountryTimeline {
    timeline: RawSeries,
}

#[derive(Debug, Deserialize)]
struct PopulationPayload {
    population: f64,
}

/// Decodes a historical-series body.
///
/// Global bodies carry `cases`/`deaths`/`recovered` at the top level;
/// country bodies nest them under `timeline`.
pub fn parse_series_response(scope: &Scope, body: &str) -> ChartResult<RawSeries> {
    let decoded = match scope {
        Scope::Global => serde_json::from_str::<RawSeries>(body),
        Scope::Country(_) => {
            serde_json::from_str::<CountryTimeline>(body).map(|payload| payload.timeline)
        }
    };
    decoded.map_err(|e| ChartError::fetch(format!("series for {scope}"), e))
}

pub fn parse_population_response(scope: &Scope, body: &str) -> ChartResult<f64> {
    serde_json::from_str::<PopulationPayload>(body)
        .map(|payload| payload.population)
        .map_err(|e| ChartError::fetch(format!("population for {scope}"), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_shape() {
        let body = r#"{
            "cases": {"1/22/20": 555, "1/23/20": 654},
            "deaths": {"1/22/20": 17, "1/23/20": 18},
            "recovered": {"1/22/20": 28, "1/23/20": 30}
        }"#;
        let series = parse_series_response(&Scope::Global, body).expect("global series");
        assert_eq!(series.cases.get("1/23/20"), Some(&654));
        assert_eq!(series.deaths.len(), 2);
        assert_eq!(series.recovered.get_index(0), Some((&"1/22/20".to_owned(), &28)));
    }

    #[test]
    fn parses_country_shape_and_ignores_extra_fields() {
        let body = r#"{
            "country": "Peru",
            "province": ["mainland"],
            "timeline": {
                "cases": {"03-01-2020": 0, "03-02-2020": 1},
                "deaths": {"03-01-2020": 0, "03-02-2020": 0},
                "recovered": {"03-01-2020": 0, "03-02-2020": 0}
            }
        }"#;
        let series = parse_series_response(&Scope::country("Peru"), body).expect("country series");
        assert_eq!(series.cases.keys().collect::<Vec<_>>(), ["03-01-2020", "03-02-2020"]);
    }

    #[test]
    fn keeps_insertion_order_without_sorting() {
        let body = r#"{"cases": {"01-03-2021": 3, "01-01-2021": 1, "01-02-2021": 2}}"#;
        let series = parse_series_response(&Scope::Global, body).expect("global series");
        assert_eq!(series.cases.values().copied().collect::<Vec<_>>(), [3, 1, 2]);
        assert!(series.deaths.is_empty());
    }

    #[test]
    fn country_body_without_timeline_is_a_fetch_failure() {
        let err = parse_series_response(&Scope::country("Atlantis"), r#"{"message": "not found"}"#)
            .expect_err("missing timeline");
        assert!(matches!(err, ChartError::FetchFailure { .. }));
    }

    #[test]
    fn parses_population_field() {
        let body = r#"{"updated": 1, "country": "Peru", "population": 33715471}"#;
        let population =
            parse_population_response(&Scope::country("Peru"), body).expect("population");
        assert_eq!(population, 33_715_471.0);
    }
}
