//! Filtered, ordered views over schedule collections.

use std::collections::HashMap;

use chrono::NaiveDate;
use mediaroster_core::model::ScheduleRecord;
use mediaroster_core::projection::{
    distinct_dates, distinct_services, distinct_teams, project, ScheduleFilter,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(
    id: &str,
    date_: NaiveDate,
    day: &str,
    service: &str,
    time: &str,
    team: &str,
) -> ScheduleRecord {
    ScheduleRecord {
        schedule_id: id.to_string(),
        date: date_,
        day: day.to_string(),
        service: service.to_string(),
        time: time.to_string(),
        team: team.to_string(),
        assignments: HashMap::new(),
        notes: String::new(),
    }
}

/// One June 2024 weekend, deliberately out of order.
fn weekend() -> Vec<ScheduleRecord> {
    vec![
        record("s3", date(2024, 6, 16), "sunday", "Main Service", "12 PM", "Video Team"),
        record("s1", date(2024, 6, 15), "saturday", "The Arrow Service", "2 PM", "Photo Team"),
        record("s5", date(2024, 6, 16), "sunday", "Main Service", "9 AM", "Video Team"),
        record("s2", date(2024, 6, 15), "saturday", "Fasting Service", "9 AM", "Photo Team"),
        record("s4", date(2024, 6, 16), "sunday", "Main Service", "3 PM", "Video Team"),
    ]
}

/// No filters: everything comes back, date ascending, and within a date
/// the raw time label compares lexically ("12 PM" before "3 PM" before
/// "9 AM").
#[test]
fn unfiltered_projection_orders_by_date_then_label() {
    let result = project(&weekend(), &ScheduleFilter::default());
    let ids: Vec<&str> = result.iter().map(|r| r.schedule_id.as_str()).collect();
    assert_eq!(ids, ["s1", "s2", "s3", "s4", "s5"]);

    let times: Vec<&str> = result.iter().map(|r| r.time.as_str()).collect();
    assert_eq!(times, ["2 PM", "9 AM", "12 PM", "3 PM", "9 AM"]);
}

/// Filters are conjunctive: day and team must both match.
#[test]
fn filters_combine_conjunctively() {
    let filter = ScheduleFilter {
        day: Some("saturday".to_string()),
        team: Some("Photo Team".to_string()),
        ..ScheduleFilter::default()
    };
    let result = project(&weekend(), &filter);
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|r| r.day == "saturday" && r.team == "Photo Team"));
}

/// A date filter keeps only that civil date.
#[test]
fn date_filter_narrows_to_one_day() {
    let filter = ScheduleFilter {
        date: Some(date(2024, 6, 16)),
        ..ScheduleFilter::default()
    };
    let result = project(&weekend(), &filter);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|r| r.day == "sunday"));
}

/// A filter nothing satisfies yields an empty view, not an error.
#[test]
fn unmatched_filter_yields_empty() {
    let filter = ScheduleFilter {
        day: Some("saturday".to_string()),
        team: Some("Video Team".to_string()),
        ..ScheduleFilter::default()
    };
    assert!(project(&weekend(), &filter).is_empty());
}

/// Projection reports what is stored: records sharing a slot both pass.
#[test]
fn duplicate_slots_pass_through() {
    let mut records = vec![
        record("a", date(2024, 6, 15), "saturday", "Fasting Service", "9 AM", "Photo Team"),
        record("b", date(2024, 6, 15), "saturday", "Fasting Service", "9 AM", "Photo Team"),
    ];
    records.push(record("c", date(2024, 6, 16), "sunday", "Main Service", "9 AM", "Photo Team"));

    let result = project(&records, &ScheduleFilter::default());
    assert_eq!(result.len(), 3);
}

/// Distinct dates sort ascending; services and teams keep first-seen order.
#[test]
fn distinct_helpers_summarize_the_collection() {
    let records = weekend();
    assert_eq!(distinct_dates(&records), vec![date(2024, 6, 15), date(2024, 6, 16)]);
    assert_eq!(
        distinct_services(&records),
        vec!["Main Service", "The Arrow Service", "Fasting Service"]
    );
    assert_eq!(distinct_teams(&records), vec!["Video Team", "Photo Team"]);
}
