//! Timeline window sizing and grid header generation.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::dates::{days_between, parse_display_date, snap_to_monday};
use crate::model::Task;

/// Days of padding before the earliest task date.
pub const LOOKBACK_DAYS: i64 = 14;
/// Days of padding after the latest task date.
pub const LOOKAHEAD_DAYS: i64 = 45;
/// Narrowest column the grid will lay out.
pub const MIN_UNIT_WIDTH: f32 = 4.0;

/// Controls what one grid column represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    #[default]
    Week,
}

impl Granularity {
    pub fn days_per_unit(&self) -> i64 {
        match self {
            Granularity::Day => 1,
            Granularity::Week => 7,
        }
    }

    /// Column width used when settings don't override it.
    pub fn default_unit_width(&self) -> f32 {
        match self {
            Granularity::Day => 40.0,
            Granularity::Week => 60.0,
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Granularity::Day => "D",
            Granularity::Week => "W",
        }
    }
}

/// One day or week column in the header's bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub date: NaiveDate,
    /// Zero-padded day of month, e.g. "06".
    pub label: String,
}

/// A run of consecutive columns in the same month, e.g. "Oct-26" spanning 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBand {
    pub label: String,
    pub span: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridHeaders {
    pub columns: Vec<GridColumn>,
    pub months: Vec<MonthBand>,
}

/// Walk from `start` (snapped to Monday for weeks) to `end` inclusive and
/// emit one column per step, grouped into month bands.
pub fn build_headers(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> GridHeaders {
    let mut headers = GridHeaders::default();
    let step = Duration::days(granularity.days_per_unit());

    let mut date = match granularity {
        Granularity::Day => start,
        Granularity::Week => snap_to_monday(start),
    };

    while date <= end {
        headers.columns.push(GridColumn {
            date,
            label: date.format("%d").to_string(),
        });

        let month_label = date.format("%b-%y").to_string();
        match headers.months.last_mut() {
            Some(band) if band.label == month_label => band.span += 1,
            _ => headers.months.push(MonthBand {
                label: month_label,
                span: 1,
            }),
        }

        date += step;
    }

    headers
}

/// The visible date range of the timeline and its column geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineWindow {
    /// Earliest date in view, before week alignment.
    pub start: NaiveDate,
    /// Latest date in view.
    pub end: NaiveDate,
    pub granularity: Granularity,
    /// Pixels per column.
    pub unit_width: f32,
}

impl TimelineWindow {
    pub fn new(start: NaiveDate, end: NaiveDate, granularity: Granularity, unit_width: f32) -> Self {
        Self {
            start,
            end,
            granularity,
            unit_width,
        }
    }

    /// Size the window around every date the tasks reference, then stretch it
    /// so the grid is at least `viewport_width` pixels wide.
    ///
    /// Dates that fail to resolve are ignored. With nothing to go on the window
    /// is padded around `today`.
    pub fn fit(
        tasks: &[Task],
        granularity: Granularity,
        unit_width: f32,
        viewport_width: f32,
        year: i32,
        today: NaiveDate,
    ) -> Self {
        let dates: Vec<NaiveDate> = tasks
            .iter()
            .flat_map(|t| t.reference_dates())
            .filter_map(|s| parse_display_date(s, year).ok())
            .collect();

        let min = dates.iter().min().copied().unwrap_or(today);
        let max = dates.iter().max().copied().unwrap_or(today);

        let mut window = Self::new(
            min.checked_sub_signed(Duration::days(LOOKBACK_DAYS))
                .unwrap_or(min),
            max.checked_add_signed(Duration::days(LOOKAHEAD_DAYS))
                .unwrap_or(max),
            granularity,
            unit_width,
        );
        window.fill_viewport(viewport_width);
        window
    }

    /// Push `end` out by whole columns until the grid covers `viewport_width`.
    /// Leaves `end` alone when the required range is not representable.
    pub fn fill_viewport(&mut self, viewport_width: f32) {
        if !(self.unit_width.is_finite() && self.unit_width > 0.0) || !viewport_width.is_finite() {
            return;
        }
        let needed = (viewport_width / self.unit_width).ceil() as i64;
        let have = self.column_count() as i64;
        if have >= needed {
            return;
        }
        let extended = (needed - have)
            .checked_mul(self.granularity.days_per_unit())
            .and_then(Duration::try_days)
            .and_then(|extra| self.end.checked_add_signed(extra));
        if let Some(end) = extended {
            self.end = end;
        }
    }

    /// First column's date: `start`, or the Monday before it in week mode.
    pub fn grid_start(&self) -> NaiveDate {
        match self.granularity {
            Granularity::Day => self.start,
            Granularity::Week => snap_to_monday(self.start),
        }
    }

    pub fn headers(&self) -> GridHeaders {
        build_headers(self.start, self.end, self.granularity)
    }

    /// Number of columns `headers()` would produce.
    pub fn column_count(&self) -> usize {
        let span = days_between(self.grid_start(), self.end);
        if span < 0 {
            0
        } else {
            (span / self.granularity.days_per_unit() + 1) as usize
        }
    }

    /// Total grid width in pixels.
    pub fn total_width(&self) -> f32 {
        self.column_count() as f32 * self.unit_width
    }

    /// Convert a date to an x-pixel offset from the grid start.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = days_between(self.grid_start(), date) as f32;
        days / self.granularity.days_per_unit() as f32 * self.unit_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_headers_label_zero_padded_days() {
        let h = build_headers(ymd(2026, 10, 1), ymd(2026, 10, 3), Granularity::Day);
        let labels: Vec<_> = h.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["01", "02", "03"]);
        assert_eq!(h.months, vec![MonthBand { label: "Oct-26".into(), span: 3 }]);
    }

    #[test]
    fn week_headers_start_on_preceding_monday() {
        // 2026-10-14 is a Wednesday.
        let wed = ymd(2026, 10, 14);
        assert_eq!(wed.weekday(), Weekday::Wed);
        let h = build_headers(wed, ymd(2026, 11, 30), Granularity::Week);
        assert_eq!(h.columns[0].date, ymd(2026, 10, 12));
        assert_eq!(h.columns[0].date.weekday(), Weekday::Mon);
        assert!(h
            .columns
            .windows(2)
            .all(|w| days_between(w[0].date, w[1].date) == 7));
    }

    #[test]
    fn ten_day_window_across_month_boundary() {
        let h = build_headers(ymd(2026, 10, 27), ymd(2026, 11, 5), Granularity::Day);
        assert_eq!(h.columns.len(), 10);
        assert_eq!(
            h.months,
            vec![
                MonthBand { label: "Oct-26".into(), span: 5 },
                MonthBand { label: "Nov-26".into(), span: 5 },
            ]
        );
        let total: usize = h.months.iter().map(|m| m.span).sum();
        assert_eq!(total, h.columns.len());
    }

    #[test]
    fn same_month_different_year_are_separate_bands() {
        let h = build_headers(ymd(2026, 12, 30), ymd(2027, 1, 2), Granularity::Day);
        let labels: Vec<_> = h.months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["Dec-26", "Jan-27"]);
    }

    #[test]
    fn inverted_window_has_no_columns() {
        let h = build_headers(ymd(2026, 10, 5), ymd(2026, 10, 1), Granularity::Day);
        assert!(h.columns.is_empty());
        assert!(h.months.is_empty());
    }

    #[test]
    fn fit_pads_task_dates() {
        let mut task = Task::new("t", "Oct 20", Uuid::nil());
        task.start_date = Some("Oct 10".into());
        let w = TimelineWindow::fit(&[task], Granularity::Day, 40.0, 0.0, 2026, ymd(2026, 1, 1));
        assert_eq!(w.start, ymd(2026, 9, 26));
        assert_eq!(w.end, ymd(2026, 12, 4));
    }

    #[test]
    fn fit_considers_planned_and_actual_dates() {
        let mut task = Task::new("t", "Oct 20", Uuid::nil());
        task.planned = Some(crate::model::DateSpan::new("Sep 1", "Oct 1"));
        task.actual = Some(crate::model::DateSpan::new("Oct 2", "Nov 30"));
        let w = TimelineWindow::fit(&[task], Granularity::Day, 40.0, 0.0, 2026, ymd(2026, 1, 1));
        assert_eq!(w.start, ymd(2026, 9, 1) - Duration::days(LOOKBACK_DAYS));
        assert_eq!(w.end, ymd(2026, 11, 30) + Duration::days(LOOKAHEAD_DAYS));
    }

    #[test]
    fn fit_skips_malformed_dates_and_falls_back_to_today() {
        let task = Task::new("t", "not a date", Uuid::nil());
        let today = ymd(2026, 10, 18);
        let w = TimelineWindow::fit(&[task], Granularity::Day, 40.0, 0.0, 2026, today);
        assert_eq!(w.start, today - Duration::days(LOOKBACK_DAYS));
        assert_eq!(w.end, today + Duration::days(LOOKAHEAD_DAYS));
    }

    #[test]
    fn fit_stretches_to_viewport() {
        let today = ymd(2026, 10, 18);
        let w = TimelineWindow::fit(&[], Granularity::Day, 40.0, 4000.0, 2026, today);
        assert_eq!(w.column_count(), 100);
        assert!(w.total_width() >= 4000.0);
        assert_eq!(w.headers().columns.len(), w.column_count());

        let weeks = TimelineWindow::fit(&[], Granularity::Week, 60.0, 6000.0, 2026, today);
        assert_eq!(weeks.column_count(), 100);
        assert_eq!(weeks.headers().columns.len(), 100);
    }

    #[test]
    fn wide_window_is_not_shrunk() {
        let today = ymd(2026, 10, 18);
        let w = TimelineWindow::fit(&[], Granularity::Day, 40.0, 100.0, 2026, today);
        assert_eq!(w.column_count(), (LOOKBACK_DAYS + LOOKAHEAD_DAYS + 1) as usize);
    }

    #[test]
    fn date_to_x_uses_snapped_start() {
        let w = TimelineWindow::new(ymd(2026, 10, 14), ymd(2026, 12, 1), Granularity::Week, 60.0);
        assert_eq!(w.grid_start(), ymd(2026, 10, 12));
        assert_eq!(w.date_to_x(ymd(2026, 10, 19)), 60.0);
    }

    #[test]
    fn tiny_width_leaves_the_window_alone() {
        let today = ymd(2026, 10, 18);
        let w = TimelineWindow::fit(&[], Granularity::Day, 1e-30, 1000.0, 2026, today);
        assert_eq!(w.end, today + Duration::days(LOOKAHEAD_DAYS));
    }

    proptest! {
        #[test]
        fn month_bands_partition_the_columns(
            offset in 0i64..4000,
            len in 0i64..400,
            weekly in any::<bool>(),
        ) {
            let granularity = if weekly { Granularity::Week } else { Granularity::Day };
            let start = ymd(2020, 1, 1) + Duration::days(offset);
            let end = start + Duration::days(len);
            let h = build_headers(start, end, granularity);

            let total: usize = h.months.iter().map(|m| m.span).sum();
            prop_assert_eq!(total, h.columns.len());

            let distinct: HashSet<(u32, String)> = h
                .columns
                .iter()
                .map(|c| (c.date.month(), c.date.format("%y").to_string()))
                .collect();
            prop_assert_eq!(h.months.len(), distinct.len());

            let window = TimelineWindow::new(start, end, granularity, 40.0);
            prop_assert_eq!(window.column_count(), h.columns.len());

            let first = h.columns[0].date;
            if weekly {
                prop_assert!(h.columns.iter().all(|c| c.date.weekday() == Weekday::Mon));
                prop_assert!(first <= start);
                prop_assert!(days_between(first, start) < 7);
            } else {
                prop_assert_eq!(first, start);
                prop_assert_eq!(h.columns.len() as i64, len + 1);
            }
        }
    }
}
