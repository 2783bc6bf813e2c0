//! Schedule table queries.

use super::RosterStore;
use crate::error::{RosterError, RosterResult};
use crate::model::ScheduleRecord;
use crate::slot::ScheduleSlot;
use crate::types::RoleName;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use std::collections::HashMap;

impl RosterStore {
    pub fn insert_schedule(&self, record: &ScheduleRecord) -> RosterResult<()> {
        let assignments_json = serde_json::to_string(&record.assignments)?;
        self.conn.execute(
            "INSERT INTO schedule (schedule_id, date, day, service, time, team, assignments, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &record.schedule_id,
                record.date.format("%Y-%m-%d").to_string(),
                &record.day,
                &record.service,
                &record.time,
                &record.team,
                assignments_json,
                &record.notes,
            ],
        )?;
        Ok(())
    }

    pub fn get_schedule(&self, schedule_id: &str) -> RosterResult<Option<ScheduleRecord>> {
        let result = self
            .conn
            .query_row(
                "SELECT schedule_id, date, day, service, time, team, assignments, notes
                 FROM schedule WHERE schedule_id = ?1",
                params![schedule_id],
                Self::schedule_row,
            )
            .optional()?;
        Ok(result)
    }

    /// Full-row update. Fails with `ScheduleNotFound` when the id is gone.
    pub fn update_schedule(&self, record: &ScheduleRecord) -> RosterResult<()> {
        let assignments_json = serde_json::to_string(&record.assignments)?;
        let updated = self.conn.execute(
            "UPDATE schedule
             SET date = ?2, day = ?3, service = ?4, time = ?5, team = ?6,
                 assignments = ?7, notes = ?8
             WHERE schedule_id = ?1",
            params![
                &record.schedule_id,
                record.date.format("%Y-%m-%d").to_string(),
                &record.day,
                &record.service,
                &record.time,
                &record.team,
                assignments_json,
                &record.notes,
            ],
        )?;
        if updated == 0 {
            return Err(RosterError::ScheduleNotFound(record.schedule_id.clone()));
        }
        Ok(())
    }

    pub fn delete_schedule(&self, schedule_id: &str) -> RosterResult<bool> {
        let deleted = self.conn.execute(
            "DELETE FROM schedule WHERE schedule_id = ?1",
            params![schedule_id],
        )?;
        Ok(deleted > 0)
    }

    /// Every schedule, ordered by date and then the raw time label.
    pub fn all_schedules(&self) -> RosterResult<Vec<ScheduleRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT schedule_id, date, day, service, time, team, assignments, notes
             FROM schedule ORDER BY date ASC, time ASC",
        )?;
        let records = stmt
            .query_map([], Self::schedule_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn schedules_for_team(&self, team: &str) -> RosterResult<Vec<ScheduleRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT schedule_id, date, day, service, time, team, assignments, notes
             FROM schedule WHERE team = ?1 ORDER BY date ASC, time ASC",
        )?;
        let rows = stmt.query_map(params![team], Self::schedule_row)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// First record occupying the slot, if any. The slot columns carry
    /// no unique index, so ties resolve by schedule_id.
    pub fn find_by_slot(&self, slot: &ScheduleSlot) -> RosterResult<Option<ScheduleRecord>> {
        let result = self
            .conn
            .query_row(
                "SELECT schedule_id, date, day, service, time, team, assignments, notes
                 FROM schedule
                 WHERE date = ?1 AND day = ?2 AND service = ?3 AND time = ?4 AND team = ?5
                 ORDER BY schedule_id LIMIT 1",
                params![
                    slot.date.format("%Y-%m-%d").to_string(),
                    &slot.day,
                    &slot.service,
                    &slot.time,
                    &slot.team,
                ],
                Self::schedule_row,
            )
            .optional()?;
        Ok(result)
    }

    pub fn schedule_count(&self) -> RosterResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM schedule", [], |row| row.get(0))?;
        Ok(count)
    }

    fn schedule_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScheduleRecord> {
        let date_text: String = row.get(1)?;
        let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;
        let assignments_json: String = row.get(6)?;
        let assignments: HashMap<RoleName, String> = serde_json::from_str(&assignments_json)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    6,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
        Ok(ScheduleRecord {
            schedule_id: row.get(0)?,
            date,
            day: row.get(2)?,
            service: row.get(3)?,
            time: row.get(4)?,
            team: row.get(5)?,
            assignments,
            notes: row.get(7)?,
        })
    }
}
