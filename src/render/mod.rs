//! Turn records into display units.
//!
//! [`render`] is a pure function: it returns the full, ordered list of units for a
//! record and performs no I/O. Printing (and the day-one animation) is the job of
//! [`Console`].

pub mod console;
pub mod progress;
pub mod table;

pub use console::Console;
pub use progress::{BarPlan, ProgressPlan};
pub use table::Table;

use crate::api::decode_day_one_series;
use crate::error::{CovidError, Result};
use crate::humanize::{humanize, humanize_signed};
use crate::models::{CountryDirectoryEntry, CountrySummary, DayOneStat, GlobalSummary};
use crate::stats::peak_increase;
use serde_json::Value;

/// Format of the "last updated" annotation.
pub const LAST_UPDATED_FORMAT: &str = "%A, %B %-d %Y at %H:%M:%S UTC";

/// Everything the renderer knows how to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Global(GlobalSummary),
    Country(CountrySummary),
    /// A day-one series in any order; rendering sorts it.
    DayOne(Vec<DayOneStat>),
}

impl Record {
    /// Classify a raw API payload.
    ///
    /// - object with `Global` → [`Record::Global`] (a full `/summary` response)
    /// - object with `Country` and `Slug` → [`Record::Country`]
    /// - array → [`Record::DayOne`], decoded permissively
    ///
    /// Any other shape fails with [`CovidError::UnsupportedType`].
    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("Global").is_some() {
            crate::api::decode_global_summary(&value).map(Record::Global)
        } else if value.get("Country").is_some() && value.get("Slug").is_some() {
            serde_json::from_value(value)
                .map(Record::Country)
                .map_err(|e| CovidError::Decode(format!("parse country summary: {e}")))
        } else if value.is_array() {
            decode_day_one_series(&value).map(Record::DayOne)
        } else {
            Err(CovidError::UnsupportedType(format!(
                "cannot render a JSON {}",
                json_kind(&value)
            )))
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without `Global` or `Country`/`Slug` keys",
    }
}

/// One printable block.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUnit {
    Table(Table),
    /// Plain annotation line.
    Text(String),
    /// Animated day-one view.
    Progress(ProgressPlan),
}

/// Display units for `record`, in print order.
pub fn render(record: &Record) -> Vec<DisplayUnit> {
    match record {
        Record::Global(g) => render_global(g),
        Record::Country(c) => render_country(c),
        Record::DayOne(series) => render_day_one(series),
    }
}

struct Counters {
    new_confirmed: u64,
    total_confirmed: u64,
    new_deaths: u64,
    total_deaths: u64,
    new_recovered: u64,
    total_recovered: u64,
}

impl From<&GlobalSummary> for Counters {
    fn from(g: &GlobalSummary) -> Self {
        Self {
            new_confirmed: g.new_confirmed,
            total_confirmed: g.total_confirmed,
            new_deaths: g.new_deaths,
            total_deaths: g.total_deaths,
            new_recovered: g.new_recovered,
            total_recovered: g.total_recovered,
        }
    }
}

impl From<&CountrySummary> for Counters {
    fn from(c: &CountrySummary) -> Self {
        Self {
            new_confirmed: c.new_confirmed,
            total_confirmed: c.total_confirmed,
            new_deaths: c.new_deaths,
            total_deaths: c.total_deaths,
            new_recovered: c.new_recovered,
            total_recovered: c.total_recovered,
        }
    }
}

fn summary_tables(subject: &str, c: &Counters) -> Vec<DisplayUnit> {
    let mut totals = Table::new(["Total Deaths", "Total Confirmed", "Total Recovered"])
        .with_title(format!("{subject}: cumulative totals"));
    totals.add_row([
        humanize(c.total_deaths),
        humanize(c.total_confirmed),
        humanize(c.total_recovered),
    ]);

    let mut daily = Table::new(["New Deaths", "New Confirmed", "New Recovered"])
        .with_title(format!("{subject}: new since previous day"));
    daily.add_row([
        humanize(c.new_deaths),
        humanize(c.new_confirmed),
        humanize(c.new_recovered),
    ]);

    vec![DisplayUnit::Table(totals), DisplayUnit::Table(daily)]
}

pub fn render_global(g: &GlobalSummary) -> Vec<DisplayUnit> {
    summary_tables("Global COVID-19 Summary", &Counters::from(g))
}

pub fn render_country(c: &CountrySummary) -> Vec<DisplayUnit> {
    let subject = format!("COVID-19 Summary for {} ({})", c.country, c.country_code);
    let mut units = summary_tables(&subject, &Counters::from(c));
    units.push(DisplayUnit::Text(format!(
        "Last updated: {}",
        c.date.format(LAST_UPDATED_FORMAT)
    )));
    units
}

pub fn render_day_one(series: &[DayOneStat]) -> Vec<DisplayUnit> {
    let plan = ProgressPlan::from_series(series);
    let who = if plan.country.is_empty() {
        "this country".to_string()
    } else {
        plan.country.clone()
    };

    let (Some(first), Some(last)) = (plan.dates.first(), plan.dates.last()) else {
        return vec![DisplayUnit::Text(format!("No day-one data for {who}."))];
    };

    let heading = DisplayUnit::Text(format!(
        "COVID-19 since day one in {who}: {} days, {} to {}",
        plan.dates.len(),
        first.format("%Y-%m-%d"),
        last.format("%Y-%m-%d")
    ));

    let mut recap = Table::new(["Statistic", "First day", "Last day", "Peak daily increase"])
        .with_title(format!("{who}: day-one recap"));
    for bar in &plan.bars {
        recap.add_row([
            bar.stat.label().to_string(),
            humanize(bar.start),
            humanize(bar.target),
            peak_increase(&bar.deltas).map(humanize_signed).unwrap_or_else(|| "-".into()),
        ]);
    }

    vec![heading, DisplayUnit::Progress(plan), DisplayUnit::Table(recap)]
}

/// Directory listing (`countries` command).
pub fn render_directory(entries: &[CountryDirectoryEntry]) -> Vec<DisplayUnit> {
    let mut table = Table::new(["Country", "ISO2", "Slug"])
        .with_title(format!("{} countries", entries.len()));
    for e in entries {
        table.add_row([e.country.as_str(), e.iso2.as_str(), e.slug.as_str()]);
    }
    vec![DisplayUnit::Table(table)]
}
