//! Week anchor resolution: walking back to the anchor weekday and
//! projecting logical days forward from it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use mediaroster_core::config::{DayOffsetEntry, RosterConfig, WeekConfig};
use mediaroster_core::error::RosterError;
use mediaroster_core::week::{
    date_for_logical_day, parse_civil_date, resolve_week_start, week_dates,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A reference already on the anchor weekday resolves to itself.
#[test]
fn anchor_day_resolves_to_itself() {
    let config = RosterConfig::default_test();
    let wednesday = date(2024, 6, 12);
    assert_eq!(wednesday.weekday(), Weekday::Wed);
    assert_eq!(resolve_week_start(wednesday, &config.week), wednesday);
}

/// The shipped configuration: a Saturday reference 2024-06-15 hangs off
/// Wednesday 2024-06-12; saturday lands on the 15th, sunday on the 16th.
#[test]
fn saturday_reference_resolves_weekend() {
    let config = RosterConfig::default_test();
    let reference = date(2024, 6, 15);
    assert_eq!(resolve_week_start(reference, &config.week), date(2024, 6, 12));
    assert_eq!(
        date_for_logical_day(reference, "saturday", &config.week).unwrap(),
        date(2024, 6, 15)
    );
    assert_eq!(
        date_for_logical_day(reference, "sunday", &config.week).unwrap(),
        date(2024, 6, 16)
    );
}

/// Every date from December 2023 through January 2025 (covering the
/// 2024 leap day) keeps the invariant: each logical day is exactly its
/// configured offset after the resolved week start.
#[test]
fn offsets_hold_across_a_full_year() {
    let config = RosterConfig::default_test();
    let mut current = date(2023, 12, 1);
    let end = date(2025, 1, 31);
    while current <= end {
        let start = resolve_week_start(current, &config.week);
        assert_eq!(
            start.weekday(),
            Weekday::Wed,
            "week start for {current} is not the anchor weekday"
        );
        assert!(start <= current, "week start {start} is after the reference {current}");
        assert!(
            current - start < Duration::days(7),
            "week start {start} is more than a week before {current}"
        );

        let saturday = date_for_logical_day(current, "saturday", &config.week).unwrap();
        let sunday = date_for_logical_day(current, "sunday", &config.week).unwrap();
        assert_eq!(saturday, start + Duration::days(3));
        assert_eq!(sunday, start + Duration::days(4));

        current = current.succ_opt().unwrap();
    }
}

/// week_dates lists every configured logical day in catalog order.
#[test]
fn week_dates_follow_catalog_order() {
    let config = RosterConfig::default_test();
    let dates = week_dates(date(2024, 6, 13), &config.week);
    assert_eq!(
        dates,
        vec![
            ("saturday".to_string(), date(2024, 6, 15)),
            ("sunday".to_string(), date(2024, 6, 16)),
        ]
    );
}

/// The anchor weekday comes from configuration, not code: a Monday
/// anchor produces Monday week starts with the same arithmetic.
#[test]
fn anchor_weekday_is_configurable() {
    let week = WeekConfig {
        anchor: Weekday::Mon,
        day_offsets: vec![DayOffsetEntry {
            day: "friday".into(),
            offset: 4,
        }],
    };
    let reference = date(2024, 6, 15); // a Saturday
    assert_eq!(resolve_week_start(reference, &week), date(2024, 6, 10));
    assert_eq!(
        date_for_logical_day(reference, "friday", &week).unwrap(),
        date(2024, 6, 14)
    );
}

/// A logical day missing from the offset table is an error, not a guess.
#[test]
fn unknown_logical_day_is_an_error() {
    let config = RosterConfig::default_test();
    let result = date_for_logical_day(date(2024, 6, 15), "friday", &config.week);
    assert!(
        matches!(result, Err(RosterError::UnknownLogicalDay(ref day)) if day == "friday"),
        "expected UnknownLogicalDay, got {result:?}"
    );
}

/// Malformed date strings fail; nothing substitutes today's date.
#[test]
fn malformed_dates_are_rejected() {
    for bad in ["", "not-a-date", "2024-13-40", "15/06/2024"] {
        let result = parse_civil_date(bad);
        assert!(
            matches!(result, Err(RosterError::InvalidDate { .. })),
            "'{bad}' should not parse, got {result:?}"
        );
    }
}
