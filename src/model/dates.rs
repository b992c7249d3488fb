//! Year-less display dates.
//!
//! Task dates are stored the way the board shows them ("Oct 30"). The year is
//! never stored; it is supplied by the caller when a string is resolved, so a
//! string always lands in the reference year, even if it was formatted from a
//! date in a neighbouring year.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::DateError;

/// Resolve a "Mon DD" string against `year`.
///
/// Strings that already carry a year ("Oct 30, 2025", as written by
/// [`format_display_date_in`]) keep it.
pub fn parse_display_date(s: &str, year: i32) -> Result<NaiveDate, DateError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DateError::Empty);
    }

    let parsed = if s.contains(',') {
        NaiveDate::parse_from_str(s, "%b %d, %Y")
    } else {
        NaiveDate::parse_from_str(&format!("{s} {year}"), "%b %d %Y")
    };

    parsed.map_err(|_| DateError::Malformed {
        input: s.to_string(),
    })
}

/// Render a date as "Mon D". The year is dropped.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Render a date for storage against reference `year`: "Mon D" inside that
/// year, "Mon D, YYYY" outside it so the string resolves back to the same day.
pub fn format_display_date_in(date: NaiveDate, year: i32) -> String {
    if date.year() == year {
        format_display_date(date)
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Every date from `start` to `end` inclusive, one day apart.
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Step back to the Monday of the date's ISO week (Sunday goes back six days).
pub fn snap_to_monday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(offset))
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_short_form_in_reference_year() {
        assert_eq!(parse_display_date("Oct 30", 2026), Ok(ymd(2026, 10, 30)));
        assert_eq!(parse_display_date("Oct 5", 2026), Ok(ymd(2026, 10, 5)));
        assert_eq!(parse_display_date(" Oct 05 ", 2026), Ok(ymd(2026, 10, 5)));
    }

    #[test]
    fn explicit_year_wins_over_reference_year() {
        assert_eq!(parse_display_date("Oct 30, 2025", 2026), Ok(ymd(2025, 10, 30)));
    }

    #[test]
    fn empty_and_malformed_are_errors() {
        assert_eq!(parse_display_date("", 2026), Err(DateError::Empty));
        assert_eq!(parse_display_date("   ", 2026), Err(DateError::Empty));
        assert!(matches!(
            parse_display_date("someday", 2026),
            Err(DateError::Malformed { .. })
        ));
        assert!(matches!(
            parse_display_date("Feb 30", 2026),
            Err(DateError::Malformed { .. })
        ));
    }

    #[test]
    fn leap_day_depends_on_reference_year() {
        assert!(parse_display_date("Feb 29", 2026).is_err());
        assert_eq!(parse_display_date("Feb 29", 2028), Ok(ymd(2028, 2, 29)));
    }

    #[test]
    fn format_drops_year_and_padding() {
        assert_eq!(format_display_date(ymd(2026, 10, 5)), "Oct 5");
        assert_eq!(format_display_date(ymd(1999, 12, 31)), "Dec 31");
    }

    #[test]
    fn year_boundary_round_trip_is_lossy() {
        let dec31 = parse_display_date("Dec 31", 2026).unwrap();
        let next = dec31 + Duration::days(1);
        assert_eq!(next, ymd(2027, 1, 1));

        let shown = format_display_date(next);
        assert_eq!(shown, "Jan 1");
        // Re-resolving lands in the reference year, a year early.
        let reparsed = parse_display_date(&shown, 2026).unwrap();
        assert_eq!(reparsed, ymd(2026, 1, 1));
        assert_ne!(reparsed, next);
        assert!(reparsed < dec31);
    }

    #[test]
    fn enumerate_days_single_and_empty() {
        let d = ymd(2026, 3, 1);
        assert_eq!(enumerate_days(d, d), vec![d]);
        assert!(enumerate_days(d, d - Duration::days(1)).is_empty());
    }

    #[test]
    fn snap_to_monday_covers_every_weekday() {
        // 2026-10-12 is a Monday.
        let monday = ymd(2026, 10, 12);
        for offset in 0..7 {
            assert_eq!(snap_to_monday(monday + Duration::days(offset)), monday);
        }
        // Sunday goes back six days, not forward one.
        assert_eq!(snap_to_monday(ymd(2026, 10, 18)), monday);
    }

    #[test]
    fn dates_outside_reference_year_keep_their_year() {
        assert_eq!(format_display_date_in(ymd(2026, 10, 5), 2026), "Oct 5");
        assert_eq!(format_display_date_in(ymd(2027, 1, 3), 2026), "Jan 3, 2027");
        assert_eq!(
            parse_display_date("Jan 3, 2027", 2026).unwrap(),
            ymd(2027, 1, 3)
        );
    }

    proptest! {
        #[test]
        fn display_round_trip_within_year(month in 0usize..12, day in 1u32..=28, year in 1990i32..2100) {
            let s = format!("{} {}", MONTHS[month], day);
            let parsed = parse_display_date(&s, year).unwrap();
            prop_assert_eq!(parsed.year(), year);
            prop_assert_eq!(format_display_date(parsed), s);
        }

        #[test]
        fn stored_form_resolves_to_the_same_day(offset in -800i64..800, year in 2000i32..2090) {
            let date = ymd(year, 6, 15) + Duration::days(offset);
            let stored = format_display_date_in(date, year);
            prop_assert_eq!(parse_display_date(&stored, year).unwrap(), date);
        }

        #[test]
        fn enumerate_days_is_inclusive_and_ascending(start_offset in 0i64..3000, len in 0i64..120) {
            let start = ymd(2020, 1, 1) + Duration::days(start_offset);
            let end = start + Duration::days(len);
            let days = enumerate_days(start, end);
            prop_assert_eq!(days.len() as i64, days_between(start, end) + 1);
            prop_assert_eq!(days.first().copied(), Some(start));
            prop_assert_eq!(days.last().copied(), Some(end));
            prop_assert!(days.windows(2).all(|w| days_between(w[0], w[1]) == 1));
        }
    }
}
