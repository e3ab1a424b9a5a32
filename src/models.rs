use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Worldwide snapshot (the `Global` object of the summary response).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSummary {
    pub new_confirmed: u64,
    pub total_confirmed: u64,
    pub new_deaths: u64,
    pub total_deaths: u64,
    pub new_recovered: u64,
    pub total_recovered: u64,
}

/// Per-country snapshot (one element of the summary's `Countries` list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountrySummary {
    pub country: String,
    pub country_code: String,
    pub slug: String,
    pub new_confirmed: u64,
    pub total_confirmed: u64,
    pub new_deaths: u64,
    pub total_deaths: u64,
    pub new_recovered: u64,
    pub total_recovered: u64,
    /// Instant of the last update.
    #[serde(with = "api_timestamp")]
    pub date: DateTime<Utc>,
}

/// Cumulative counts for one country on one calendar day.
///
/// `active` is taken from the API as-is, never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayOneStat {
    #[serde(default)]
    pub country: String,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
    #[serde(with = "api_timestamp")]
    pub date: DateTime<Utc>,
}

/// Static reference row from the bundled country list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDirectoryEntry {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Slug")]
    pub slug: String,
    #[serde(rename = "ISO2")]
    pub iso2: String,
}

/// Parse an API timestamp such as `2020-04-05T06:37:00Z`.
///
/// The trailing `Z` is rewritten to `+00:00` before RFC 3339 parsing. Values
/// without any offset are taken as UTC.
pub fn parse_api_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    let normalized = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Inverse of [`parse_api_timestamp`]: RFC 3339 with a `Z` suffix, fractional
/// seconds only when present.
///
/// The instant round-trips, the text may not: fractions are written with 3, 6 or 9
/// digits, so `10.5Z` comes back as `10.500Z`.
pub fn format_api_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serde adapter for API timestamps.
pub mod api_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_api_timestamp(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_api_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}
