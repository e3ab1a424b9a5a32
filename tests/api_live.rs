//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use covid19_rs::Client;
use covid19_rs::stats::{Stat, day_one_deltas};

#[test]
fn fetch_global() {
    let cli = Client::default();
    let g = cli.fetch_global_summary().unwrap();
    assert!(g.total_confirmed >= g.new_confirmed);
}

#[test]
fn fetch_country_case_insensitive() {
    let cli = Client::default();
    let c = cli.fetch_country_summary("south africa").unwrap();
    assert_eq!(c.country_code, "ZA");
    assert_eq!(c.slug, "south-africa");
}

#[test]
fn fetch_day_one_series() {
    let cli = Client::default();
    let series = cli.fetch_day_one_series("south-africa").unwrap();
    assert!(!series.is_empty());
    let (sorted, all) = day_one_deltas(&series);
    let confirmed = all.iter().find(|d| d.stat == Stat::Confirmed).unwrap();
    assert_eq!(confirmed.deltas.len(), sorted.len() - 1);
}
