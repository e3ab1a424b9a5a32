use covid19_rs::{Client, CovidError};
use covid19_rs::api::{decode_day_one_series, decode_global_summary, find_country_summary};
use serde_json::Value;

fn fixture(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn global_summary_comes_from_global_object() {
    let g = decode_global_summary(&fixture("summary.json")).unwrap();
    assert_eq!(g.new_confirmed, 500_000);
    assert_eq!(g.total_confirmed, 12_345_678);
    assert_eq!(g.new_deaths, 1_234);
    assert_eq!(g.total_deaths, 567_890);
    assert_eq!(g.new_recovered, 0);
    assert_eq!(g.total_recovered, 7_000_000);
}

#[test]
fn missing_global_is_a_decode_error() {
    let v: Value = serde_json::from_str(r#"{"Countries": []}"#).unwrap();
    assert!(matches!(decode_global_summary(&v), Err(CovidError::Decode(_))));
}

#[test]
fn malformed_global_is_a_decode_error() {
    let v: Value = serde_json::from_str(r#"{"Global": {"NewConfirmed": "many"}}"#).unwrap();
    assert!(matches!(decode_global_summary(&v), Err(CovidError::Decode(_))));
}

#[test]
fn country_summary_match_ignores_case() {
    let v = fixture("summary.json");
    let za = find_country_summary(&v, "south africa").unwrap();
    assert_eq!(za.country, "South Africa");
    assert_eq!(za.country_code, "ZA");
    assert_eq!(za.slug, "south-africa");
    assert_eq!(za.total_confirmed, 276_242);

    let upper = find_country_summary(&v, "SOUTH AFRICA").unwrap();
    assert_eq!(za, upper);
}

#[test]
fn country_summary_needs_exact_name() {
    let v = fixture("summary.json");
    let err = find_country_summary(&v, "South").unwrap_err();
    assert!(matches!(err, CovidError::NotFound(_)), "{err}");
}

#[test]
fn country_summary_without_list_is_a_decode_error() {
    let v: Value = serde_json::from_str(r#"{"Global": {}}"#).unwrap();
    assert!(matches!(
        find_country_summary(&v, "Chad"),
        Err(CovidError::Decode(_))
    ));
}

#[test]
fn day_one_drops_undecodable_elements_and_keeps_order() {
    let series = decode_day_one_series(&fixture("dayone.json")).unwrap();
    assert_eq!(series.len(), 4);
    let confirmed: Vec<u64> = series.iter().map(|d| d.confirmed).collect();
    assert_eq!(confirmed, vec![7, 1, 3, 13]);
    assert!(series.iter().all(|d| d.country == "South Africa"));
}

#[test]
fn day_one_keeps_active_as_reported() {
    let v: Value = serde_json::from_str(
        r#"[{"Confirmed": 10, "Deaths": 1, "Recovered": 2, "Active": 5, "Date": "2020-04-01T00:00:00Z"}]"#,
    )
    .unwrap();
    let series = decode_day_one_series(&v).unwrap();
    assert_eq!(series[0].active, 5);
}

#[test]
fn day_one_requires_an_array() {
    let v: Value = serde_json::from_str(r#"{"message": "Not Found"}"#).unwrap();
    assert!(matches!(decode_day_one_series(&v), Err(CovidError::Decode(_))));
}

#[test]
fn empty_day_one_array_is_fine() {
    let v: Value = serde_json::from_str("[]").unwrap();
    assert!(decode_day_one_series(&v).unwrap().is_empty());
}

#[test]
fn transport_errors_keep_their_source() {
    let client = Client::new("not a url").unwrap();
    let err = client.fetch_global_summary().unwrap_err();
    assert!(matches!(err, CovidError::Network(_)), "{err}");
    assert!(std::error::Error::source(&err).is_some());
}
