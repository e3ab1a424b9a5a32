use crate::models::DayOneStat;
use serde::{Deserialize, Serialize};

/// One of the four cumulative counters of a day-one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Confirmed,
    Deaths,
    Recovered,
    Active,
}

impl Stat {
    /// Display order of the progress view.
    pub const ALL: [Stat; 4] = [Stat::Confirmed, Stat::Deaths, Stat::Recovered, Stat::Active];

    pub fn label(self) -> &'static str {
        match self {
            Stat::Confirmed => "Confirmed",
            Stat::Deaths => "Deaths",
            Stat::Recovered => "Recovered",
            Stat::Active => "Active",
        }
    }

    pub fn value(self, day: &DayOneStat) -> u64 {
        match self {
            Stat::Confirmed => day.confirmed,
            Stat::Deaths => day.deaths,
            Stat::Recovered => day.recovered,
            Stat::Active => day.active,
        }
    }
}

/// Sort a series ascending by date. Stable, so same-day rows keep arrival order.
pub fn sort_by_date(series: &mut [DayOneStat]) {
    series.sort_by_key(|d| d.date);
}

/// Day-over-day differences `v[i] - v[i-1]` for `i = 1..n`.
///
/// `series` must already be sorted. `n` days give `n - 1` deltas; fewer than two
/// days give none. Deltas can be negative (the active count shrinks, or the
/// source revises a total downwards) and saturate at the `i64` bounds.
pub fn deltas(series: &[DayOneStat], stat: Stat) -> Vec<i64> {
    series
        .windows(2)
        .map(|w| signed_diff(stat.value(&w[0]), stat.value(&w[1])))
        .collect()
}

fn signed_diff(from: u64, to: u64) -> i64 {
    let diff = i128::from(to) - i128::from(from);
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}

/// Largest single-day increase, if any day increased.
pub fn peak_increase(deltas: &[i64]) -> Option<i64> {
    deltas.iter().copied().filter(|d| *d > 0).max()
}

/// Deltas of one counter plus the endpoints they connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaSeries {
    pub stat: Stat,
    /// Cumulative value on the first day.
    pub first: u64,
    /// Cumulative value on the last day; `first + sum(deltas) == last` unless a
    /// delta saturated.
    pub last: u64,
    pub deltas: Vec<i64>,
}

impl DeltaSeries {
    pub fn compute(series: &[DayOneStat], stat: Stat) -> Self {
        let first = series.first().map(|d| stat.value(d)).unwrap_or(0);
        let last = series.last().map(|d| stat.value(d)).unwrap_or(0);
        Self {
            stat,
            first,
            last,
            deltas: deltas(series, stat),
        }
    }

    pub fn peak(&self) -> Option<i64> {
        peak_increase(&self.deltas)
    }
}

/// Sort a copy of `series` and compute deltas for all four counters, in [`Stat::ALL`] order.
pub fn day_one_deltas(series: &[DayOneStat]) -> (Vec<DayOneStat>, Vec<DeltaSeries>) {
    let mut sorted = series.to_vec();
    sort_by_date(&mut sorted);
    let all = Stat::ALL
        .iter()
        .map(|s| DeltaSeries::compute(&sorted, *s))
        .collect();
    (sorted, all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn day(d: u32, confirmed: u64, active: u64) -> DayOneStat {
        DayOneStat {
            country: "Testland".into(),
            confirmed,
            deaths: 0,
            recovered: 0,
            active,
            date: Utc.with_ymd_and_hms(2020, 3, d, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn deltas_are_pairwise_differences() {
        let s = vec![day(1, 1, 1), day(2, 4, 3), day(3, 10, 2)];
        assert_eq!(deltas(&s, Stat::Confirmed), vec![3, 6]);
        assert_eq!(deltas(&s, Stat::Active), vec![2, -1]);
    }

    #[test]
    fn short_series_have_no_deltas() {
        assert!(deltas(&[], Stat::Deaths).is_empty());
        assert!(deltas(&[day(1, 5, 5)], Stat::Deaths).is_empty());
    }

    #[test]
    fn huge_counters_saturate_instead_of_wrapping() {
        let s = vec![day(1, 0, u64::MAX), day(2, u64::MAX, 0)];
        assert_eq!(deltas(&s, Stat::Confirmed), vec![i64::MAX]);
        assert_eq!(deltas(&s, Stat::Active), vec![i64::MIN]);
    }

    #[test]
    fn peak_ignores_decreases() {
        let s = vec![day(1, 10, 10), day(2, 8, 8), day(3, 9, 9)];
        let ds = DeltaSeries::compute(&s, Stat::Confirmed);
        assert_eq!(ds.peak(), Some(1));
        let ds = DeltaSeries::compute(&s[..2], Stat::Confirmed);
        assert_eq!(ds.peak(), None);
    }
}
