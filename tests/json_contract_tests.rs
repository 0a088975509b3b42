use epichart::api::{
    ChartDataConfig, EngineState, VIEW_SET_JSON_SCHEMA_V1, ViewSetJsonContractV1,
};
use epichart::core::{DatedCounts, Population, RawSeries, Scope, ViewKind};
use epichart::error::ChartError;

fn state(population: Option<Population>) -> EngineState {
    let cases: DatedCounts = [("01-01-2021", 100), ("01-02-2021", 150), ("01-03-2021", 120)]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect();
    let series = RawSeries::new(cases.clone(), cases.clone(), cases);
    EngineState::new(
        Scope::country("Peru"),
        series,
        population,
        &ChartDataConfig::default(),
    )
}

#[test]
fn contract_round_trips_every_view() {
    let population = Population::new(200_000.0).expect("population");
    let state = state(Some(population));
    let json = state.to_json_contract_v1_pretty().expect("serialize contract");

    let contract = ViewSetJsonContractV1::from_json_str(&json).expect("parse contract");
    assert_eq!(contract.schema_version, VIEW_SET_JSON_SCHEMA_V1);
    assert_eq!(contract.scope, Scope::country("Peru"));
    assert!(contract.is_normalized());
    assert_eq!(contract.population, Some(population));

    let views = contract.into_views().expect("complete view set");
    assert_eq!(&views, state.views());
}

#[test]
fn contract_keys_views_by_wire_name_in_cyclic_order() {
    let json = state(None)
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let keys: Vec<&str> = value["views"]
        .as_object()
        .expect("views object")
        .keys()
        .map(String::as_str)
        .collect();
    let expected: Vec<&str> = ViewKind::ALL.iter().map(|kind| kind.as_str()).collect();
    assert_eq!(keys.len(), ViewKind::COUNT);
    for name in expected {
        assert!(keys.contains(&name), "missing {name}");
    }
    assert_eq!(value["population"], serde_json::Value::Null);
}

#[test]
fn contract_rejects_unknown_schema_version() {
    let json = state(None)
        .to_json_contract_v1_pretty()
        .expect("serialize contract")
        .replacen("\"schema_version\": 1", "\"schema_version\": 9", 1);
    match ViewSetJsonContractV1::from_json_str(&json) {
        Err(ChartError::InvalidData(message)) => assert!(message.contains("schema version")),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn incomplete_view_set_is_rejected() {
    let mut contract = ViewSetJsonContractV1::from_state(&state(None));
    contract.views.shift_remove(&ViewKind::DailyRecovered);
    match contract.into_views() {
        Err(ChartError::InvalidData(message)) => assert!(message.contains("dailyRecovered")),
        other => panic!("expected missing view, got {other:?}"),
    }
}

#[test]
fn non_positive_population_in_payload_is_rejected() {
    let json = state(None)
        .to_json_contract_v1_pretty()
        .expect("serialize contract")
        .replacen("\"population\": null", "\"population\": -5.0", 1);
    assert!(ViewSetJsonContractV1::from_json_str(&json).is_err());
}
