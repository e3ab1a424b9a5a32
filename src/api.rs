//! Synchronous client for the **COVID-19 REST API** (`api.covid19api.com`).
//!
//! Three read-only calls are exposed: the global summary, one country's summary (both
//! served by the `summary` endpoint) and a country's daily series since its first case.
//!
//! ### Notes
//! - Every call issues exactly one GET. Nothing is cached, so two summary calls mean
//!   two full downloads of the summary list.
//! - There is no retry and no request timeout: a hung request blocks the caller.
//! - Decoding is split into pure functions (`decode_*`, `find_country_summary`) that
//!   work on an already parsed `serde_json::Value`, so payloads can be decoded offline.
//!
//! Typical usage:
//! ```no_run
//! # use covid19_rs::Client;
//! let client = Client::default();
//! let global = client.fetch_global_summary()?;
//! println!("{} confirmed", global.total_confirmed);
//! # Ok::<(), covid19_rs::CovidError>(())
//! ```
use crate::config::{API_BASE, DAY_ONE_ENDPOINT, SUMMARY_ENDPOINT};
use crate::directory::eq_ignore_case;
use crate::error::{CovidError, Result};
use crate::models::{CountrySummary, DayOneStat, GlobalSummary};
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(API_BASE).expect("reqwest client build")
    }
}

// Slugs are lowercase words joined by '-'; keep those unescaped.
const SLUG_SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

impl Client {
    /// Build a client against `base_url` (e.g. a local mirror of the API).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(None::<Duration>)
            .redirect(Policy::limited(5))
            .user_agent(concat!("covid19_rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {url}");
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CovidError::Status {
                url: url.to_string(),
                status,
            });
        }
        resp.json::<Value>()
            .map_err(|e| CovidError::Decode(format!("GET {url}: {e}")))
    }

    /// Worldwide totals and daily deltas.
    ///
    /// ### Errors
    /// - `Network` on transport failure, `Status` on a non-success HTTP status
    /// - `Decode` if the `Global` object is missing or malformed
    pub fn fetch_global_summary(&self) -> Result<GlobalSummary> {
        let v = self.get_json(&self.url(SUMMARY_ENDPOINT))?;
        decode_global_summary(&v)
    }

    /// Snapshot for the country whose name matches `name` (case-insensitive, exact).
    ///
    /// Downloads the full summary list on every call.
    ///
    /// ### Errors
    /// - `NotFound` if no country in the list has that name
    /// - `Network` / `Status` / `Decode` as for [`Client::fetch_global_summary`]
    pub fn fetch_country_summary(&self, name: &str) -> Result<CountrySummary> {
        let v = self.get_json(&self.url(SUMMARY_ENDPOINT))?;
        find_country_summary(&v, name)
    }

    /// Daily cumulative counts for `slug` since the first confirmed case.
    ///
    /// Elements that do not decode are dropped. The result keeps arrival order;
    /// sort it (see [`crate::stats::sort_by_date`]) before computing deltas.
    pub fn fetch_day_one_series(&self, slug: &str) -> Result<Vec<DayOneStat>> {
        let slug = percent_encoding::utf8_percent_encode(slug.trim(), SLUG_SAFE).to_string();
        let url = self.url(&format!("{DAY_ONE_ENDPOINT}/{slug}"));
        let v = self.get_json(&url)?;
        decode_day_one_series(&v)
    }
}

/// Extract and decode the `Global` object of a summary payload.
pub fn decode_global_summary(summary: &Value) -> Result<GlobalSummary> {
    let global = summary
        .get("Global")
        .ok_or_else(|| CovidError::Decode("summary response has no `Global` object".into()))?;
    serde_json::from_value(global.clone())
        .map_err(|e| CovidError::Decode(format!("parse `Global`: {e}")))
}

/// Scan the summary's `Countries` list for `name` and decode the first match.
pub fn find_country_summary(summary: &Value, name: &str) -> Result<CountrySummary> {
    let countries = summary
        .get("Countries")
        .and_then(Value::as_array)
        .ok_or_else(|| CovidError::Decode("summary response has no `Countries` list".into()))?;

    let wanted = name.trim();
    let hit = countries.iter().find(|c| {
        c.get("Country")
            .and_then(Value::as_str)
            .is_some_and(|country| eq_ignore_case(country, wanted))
    });

    match hit {
        Some(c) => serde_json::from_value(c.clone())
            .map_err(|e| CovidError::Decode(format!("parse summary for {wanted}: {e}"))),
        None => Err(CovidError::NotFound(format!(
            "no summary for country '{wanted}'"
        ))),
    }
}

/// Decode a day-one payload element-wise, dropping elements that do not fit.
pub fn decode_day_one_series(payload: &Value) -> Result<Vec<DayOneStat>> {
    let arr = payload.as_array().ok_or_else(|| {
        CovidError::Decode("unexpected day-one response shape: not a top-level array".into())
    })?;

    let out: Vec<DayOneStat> = arr
        .iter()
        .filter_map(|el| serde_json::from_value(el.clone()).ok())
        .collect();

    let dropped = arr.len() - out.len();
    if dropped > 0 {
        debug!("dropped {dropped} of {} day-one elements", arr.len());
        if out.is_empty() {
            warn!("no day-one element could be decoded");
        }
    }
    Ok(out)
}
