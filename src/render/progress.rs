//! Lock-step progress bars for the day-one view.
//!
//! A [`ProgressPlan`] is pure data: the sorted dates plus, per counter, the starting
//! value, the target and the per-day increments. Frames are produced on demand, so
//! the same plan can be drawn to a terminal or inspected in tests.

use crate::humanize::humanize;
use crate::models::DayOneStat;
use crate::stats::{DeltaSeries, Stat, day_one_deltas};
use chrono::{DateTime, Utc};

const FILLED: char = '█';
const EMPTY: char = '░';
const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarPlan {
    pub stat: Stat,
    /// Value shown before the first step (the first day's cumulative count).
    pub start: u64,
    /// The final day's cumulative count.
    pub target: u64,
    /// Advance per step; `deltas.len()` equals the plan's step count.
    pub deltas: Vec<i64>,
}

impl BarPlan {
    fn from_deltas(ds: DeltaSeries) -> Self {
        Self {
            stat: ds.stat,
            start: ds.first,
            target: ds.last,
            deltas: ds.deltas,
        }
    }

    /// Cumulative value after `step` advances (step 0 is the start). The last
    /// step is always the target.
    pub fn position(&self, step: usize) -> i128 {
        if step >= self.deltas.len() && !self.deltas.is_empty() {
            return i128::from(self.target);
        }
        let advanced: i128 = self.deltas.iter().take(step).map(|d| i128::from(*d)).sum();
        i128::from(self.start) + advanced
    }

    /// Filled cells for `position` on a bar of `width` cells, clamped to `[0, width]`.
    pub fn filled_cells(&self, position: i128, width: usize) -> usize {
        if self.target == 0 {
            return if position > 0 { width } else { 0 };
        }
        let clamped = position.clamp(0, i128::from(self.target)) as f64;
        ((clamped / self.target as f64) * width as f64).round() as usize
    }

    pub fn line(&self, step: usize, width: usize) -> String {
        let pos = self.position(step);
        let filled = self.filled_cells(pos, width).min(width);
        let bar: String = std::iter::repeat_n(FILLED, filled)
            .chain(std::iter::repeat_n(EMPTY, width - filled))
            .collect();
        format!(
            "{:<label_w$} {bar} {} / {}",
            self.stat.label(),
            humanize(pos.clamp(0, i128::from(u64::MAX)) as u64),
            humanize(self.target),
            label_w = LABEL_WIDTH
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressPlan {
    pub country: String,
    /// Dates in ascending order, one per day of the series.
    pub dates: Vec<DateTime<Utc>>,
    /// One bar per counter, in [`Stat::ALL`] order.
    pub bars: Vec<BarPlan>,
}

impl ProgressPlan {
    /// Sort `series` by date and derive the four bars.
    pub fn from_series(series: &[DayOneStat]) -> Self {
        let (sorted, deltas) = day_one_deltas(series);
        Self {
            country: sorted.first().map(|d| d.country.clone()).unwrap_or_default(),
            dates: sorted.iter().map(|d| d.date).collect(),
            bars: deltas.into_iter().map(BarPlan::from_deltas).collect(),
        }
    }

    /// Number of animation steps: one per day after the first.
    pub fn steps(&self) -> usize {
        self.dates.len().saturating_sub(1)
    }

    /// Lines of one frame: the current date followed by one line per bar.
    ///
    /// A plan without dates reports `day 0 of 0`.
    pub fn frame(&self, step: usize, bar_width: usize) -> Vec<String> {
        let step = step.min(self.steps());
        let heading = match self.dates.get(step) {
            Some(d) => format!(
                "Date: {}  (day {} of {})",
                d.format("%Y-%m-%d"),
                step + 1,
                self.dates.len()
            ),
            None => "Date: -  (day 0 of 0)".to_string(),
        };
        let mut lines = vec![heading];
        lines.extend(self.bars.iter().map(|b| b.line(step, bar_width)));
        lines
    }

    /// Height of a frame in lines, used to redraw in place.
    pub fn frame_height(&self) -> usize {
        1 + self.bars.len()
    }
}

/// Bar width that leaves room for the label and the `value / target` suffix.
pub fn bar_width_for(columns: usize) -> usize {
    const SUFFIX: usize = 34;
    columns
        .saturating_sub(LABEL_WIDTH + 1 + SUFFIX)
        .clamp(10, 50)
}
