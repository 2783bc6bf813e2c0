//! Slot identity.
//!
//! A slot is one team's roster position at one service sitting:
//! (date, day, service, time, team). The canonical key joins the five
//! parts with '|', with the date always rendered `YYYY-MM-DD`, so every
//! caller looking at the same sitting derives the same key.

use crate::model::ScheduleRecord;
use crate::types::{DayName, TeamName};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const KEY_DELIMITER: &str = "|";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub date:    NaiveDate,
    pub day:     DayName,
    pub service: String,
    pub time:    String,
    pub team:    TeamName,
}

impl ScheduleSlot {
    /// Canonical composite key: `YYYY-MM-DD|day|service|time|team`.
    pub fn key(&self) -> String {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.day.clone(),
            self.service.clone(),
            self.time.clone(),
            self.team.clone(),
        ]
        .join(KEY_DELIMITER)
    }
}

impl From<&ScheduleRecord> for ScheduleSlot {
    fn from(record: &ScheduleRecord) -> Self {
        Self {
            date: record.date,
            day: record.day.clone(),
            service: record.service.clone(),
            time: record.time.clone(),
            team: record.team.clone(),
        }
    }
}
