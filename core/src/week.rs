//! Week anchor arithmetic.
//!
//! A roster week hangs off a single anchor weekday (Wednesday in the
//! shipped configuration). Resolving a reference date walks back to the
//! most recent anchor day, and each configured logical day sits a fixed
//! offset forward from that anchor.
//!
//! RULE: the reference date is always an explicit parameter. Nothing in
//! this module reads a clock.

use crate::config::WeekConfig;
use crate::error::{RosterError, RosterResult};
use crate::types::DayName;
use chrono::{Datelike, Duration, NaiveDate};

/// Most recent anchor weekday at or before `reference`. A reference
/// already on the anchor weekday maps to itself.
pub fn resolve_week_start(reference: NaiveDate, week: &WeekConfig) -> NaiveDate {
    let reference_idx = reference.weekday().num_days_from_sunday();
    let anchor_idx = week.anchor.num_days_from_sunday();
    let days_back = (reference_idx + 7 - anchor_idx) % 7;
    reference - Duration::days(days_back as i64)
}

/// Concrete date of a logical day within the week containing `reference`.
pub fn date_for_logical_day(
    reference: NaiveDate,
    day: &str,
    week: &WeekConfig,
) -> RosterResult<NaiveDate> {
    let offset = week.offset_for(day)?;
    Ok(resolve_week_start(reference, week) + Duration::days(offset))
}

/// All configured logical days of the reference week, in catalog order.
pub fn week_dates(reference: NaiveDate, week: &WeekConfig) -> Vec<(DayName, NaiveDate)> {
    let start = resolve_week_start(reference, week);
    week.day_offsets
        .iter()
        .map(|entry| (entry.day.clone(), start + Duration::days(entry.offset)))
        .collect()
}

/// Parse a civil date from its common string representations.
///
/// Accepts plain `YYYY-MM-DD`, an RFC 3339 datetime (time-of-day and
/// zone offset are discarded, keeping the date as written) or a naive
/// `YYYY-MM-DDTHH:MM:SS`. Anything else is an `InvalidDate`; the caller
/// never gets today's date as a fallback.
pub fn parse_civil_date(input: &str) -> RosterResult<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    Err(RosterError::InvalidDate {
        input: input.to_string(),
        reason: "expected YYYY-MM-DD or an ISO datetime".to_string(),
    })
}
