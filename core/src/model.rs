//! Schedule record shapes shared by the store, the desk and callers.

use crate::types::{DayName, RoleName, ScheduleId, TeamName};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A persisted roster for one team at one service sitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub schedule_id: ScheduleId,
    pub date:        NaiveDate,
    pub day:         DayName,
    pub service:     String,
    pub time:        String,
    pub team:        TeamName,
    pub assignments: HashMap<RoleName, String>,
    pub notes:       String,
}

impl ScheduleRecord {
    /// Logical day capitalized for display ("saturday" becomes "Saturday").
    pub fn day_label(&self) -> String {
        day_label(&self.day)
    }

    /// Long display form, e.g. "Saturday, June 15, 2024".
    pub fn formatted_date(&self) -> String {
        long_date(self.date)
    }
}

pub fn day_label(day: &str) -> String {
    let mut chars = day.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Fields for a new schedule. Assignments and notes may start empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub date:    NaiveDate,
    pub day:     DayName,
    pub service: String,
    pub time:    String,
    pub team:    TeamName,
    #[serde(default)]
    pub assignments: HashMap<RoleName, String>,
    #[serde(default)]
    pub notes: String,
}

/// A partial update. Only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleChanges {
    pub date:        Option<NaiveDate>,
    pub day:         Option<DayName>,
    pub service:     Option<String>,
    pub time:        Option<String>,
    pub team:        Option<TeamName>,
    pub assignments: Option<HashMap<RoleName, String>>,
    pub notes:       Option<String>,
}
