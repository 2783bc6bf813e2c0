//! Read-side filtering and ordering of schedule collections.

use crate::model::ScheduleRecord;
use crate::types::{DayName, TeamName};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional, conjunctive filters. `None` means no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleFilter {
    pub date:    Option<NaiveDate>,
    pub day:     Option<DayName>,
    pub service: Option<String>,
    pub team:    Option<TeamName>,
}

impl ScheduleFilter {
    pub fn matches(&self, record: &ScheduleRecord) -> bool {
        if let Some(date) = self.date {
            if record.date != date {
                return false;
            }
        }
        if let Some(day) = &self.day {
            if &record.day != day {
                return false;
            }
        }
        if let Some(service) = &self.service {
            if &record.service != service {
                return false;
            }
        }
        if let Some(team) = &self.team {
            if &record.team != team {
                return false;
            }
        }
        true
    }
}

/// Filter and order a record collection.
///
/// Order is date ascending, then the time label ascending. The time
/// comparison is lexical on the raw label: "12 PM" sorts before "3 PM",
/// which sorts before "9 AM".
pub fn project(records: &[ScheduleRecord], filter: &ScheduleFilter) -> Vec<ScheduleRecord> {
    let mut result: Vec<ScheduleRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    result.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    result
}

/// Distinct dates present, sorted ascending.
pub fn distinct_dates(records: &[ScheduleRecord]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = records.iter().map(|record| record.date).collect();
    dates.sort();
    dates.dedup();
    dates
}

/// Distinct service names, in first-seen order. Callers sort for display.
pub fn distinct_services(records: &[ScheduleRecord]) -> Vec<String> {
    distinct(records.iter().map(|record| record.service.as_str()))
}

/// Distinct team names, in first-seen order. Callers sort for display.
pub fn distinct_teams(records: &[ScheduleRecord]) -> Vec<String> {
    distinct(records.iter().map(|record| record.team.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|existing| existing == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
