//! The scheduling desk: every read and write goes through here.
//!
//! The desk wires the pure pieces (week math, slot keys, merging,
//! projection) to the store, validates day and team names against the
//! configuration and enforces caller policy on every mutation.

use crate::auth::{Caller, Member, NewMember};
use crate::config::RosterConfig;
use crate::error::{RosterError, RosterResult};
use crate::model::{ScheduleChanges, ScheduleDraft, ScheduleRecord};
use crate::projection::{self, ScheduleFilter};
use crate::roster::{merge_assignments, RoleAssignment};
use crate::slot::ScheduleSlot;
use crate::store::RosterStore;
use crate::week;
use chrono::NaiveDate;

pub struct ScheduleDesk {
    pub store:  RosterStore,
    pub config: RosterConfig,
}

impl ScheduleDesk {
    /// Open a desk over a database file and a data directory.
    pub fn build(db_path: &str, data_dir: &str) -> RosterResult<Self> {
        let store = RosterStore::open(db_path)?;
        store.migrate()?;
        let config = RosterConfig::load(data_dir)?;
        Ok(Self { store, config })
    }

    /// In-memory desk with the shipped catalog (used in tests).
    pub fn build_test() -> RosterResult<Self> {
        let store = RosterStore::in_memory()?;
        store.migrate()?;
        Ok(Self {
            store,
            config: RosterConfig::default_test(),
        })
    }

    // ── Membership ────────────────────────────────────────────

    pub fn register_member(&self, new: NewMember) -> RosterResult<Member> {
        let username = new.username.trim().to_lowercase();
        if username.chars().count() < 3 {
            return Err(RosterError::InvalidField {
                field: "username",
                reason: "must be at least 3 characters".to_string(),
            });
        }
        let email = new.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(RosterError::InvalidField {
                field: "email",
                reason: "must be an email address".to_string(),
            });
        }
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::InvalidField {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.config.is_known_team(&new.team) {
            return Err(RosterError::UnknownTeam(new.team));
        }
        if self.store.username_taken(&username)? {
            return Err(RosterError::InvalidField {
                field: "username",
                reason: format!("'{username}' is already registered"),
            });
        }
        if self.store.email_taken(&email)? {
            return Err(RosterError::InvalidField {
                field: "email",
                reason: format!("'{email}' is already registered"),
            });
        }

        let member = Member {
            member_id: uuid::Uuid::new_v4().to_string(),
            username,
            email,
            name,
            role: new.role,
            team: new.team,
            active: true,
        };
        self.store.insert_member(&member)?;
        log::debug!("registered member {} ({})", member.username, member.role);
        Ok(member)
    }

    /// Active team members of one team, for assignee pickers.
    pub fn team_members(&self, team: &str) -> RosterResult<Vec<Member>> {
        if !self.config.is_known_team(team) {
            return Err(RosterError::UnknownTeam(team.to_string()));
        }
        self.store.team_members(team)
    }

    /// Resolve a caller identity from the directory. Deactivated
    /// accounts are refused.
    pub fn caller_for(&self, username: &str) -> RosterResult<Caller> {
        let member = self
            .store
            .member_by_username(&username.trim().to_lowercase())?
            .ok_or_else(|| RosterError::InvalidField {
                field: "username",
                reason: format!("no member '{username}'"),
            })?;
        if !member.active {
            return Err(RosterError::AccessDenied(
                "account is deactivated".to_string(),
            ));
        }
        Ok(Caller::from_member(&member))
    }

    // ── Schedules ─────────────────────────────────────────────

    pub fn create_schedule(
        &self,
        caller: &Caller,
        draft: ScheduleDraft,
    ) -> RosterResult<ScheduleRecord> {
        caller.authorize_modify(&draft.team)?;
        if !self.config.week.is_logical_day(&draft.day) {
            return Err(RosterError::UnknownLogicalDay(draft.day));
        }
        if !self.config.is_known_team(&draft.team) {
            return Err(RosterError::UnknownTeam(draft.team));
        }
        let service = non_blank(&draft.service, "service")?;
        let time = non_blank(&draft.time, "time")?;

        let record = ScheduleRecord {
            schedule_id: uuid::Uuid::new_v4().to_string(),
            date: draft.date,
            day: draft.day,
            service,
            time,
            team: draft.team,
            assignments: draft.assignments,
            notes: draft.notes.trim().to_string(),
        };
        let slot = ScheduleSlot::from(&record);
        if let Some(existing) = self.store.find_by_slot(&slot)? {
            log::warn!(
                "slot {} already held by schedule {}",
                slot.key(),
                existing.schedule_id
            );
            return Err(RosterError::DuplicateSlot(slot.key()));
        }
        self.store.insert_schedule(&record)?;
        log::debug!("created schedule {} for slot {}", record.schedule_id, slot.key());
        Ok(record)
    }

    /// Partial update. Authorization runs against the stored record's
    /// team, before any change is applied.
    pub fn update_schedule(
        &self,
        caller: &Caller,
        schedule_id: &str,
        changes: ScheduleChanges,
    ) -> RosterResult<ScheduleRecord> {
        let mut record = self
            .store
            .get_schedule(schedule_id)?
            .ok_or_else(|| RosterError::ScheduleNotFound(schedule_id.to_string()))?;
        caller.authorize_modify(&record.team)?;

        if let Some(day) = changes.day {
            if !self.config.week.is_logical_day(&day) {
                return Err(RosterError::UnknownLogicalDay(day));
            }
            record.day = day;
        }
        if let Some(team) = changes.team {
            if !self.config.is_known_team(&team) {
                return Err(RosterError::UnknownTeam(team));
            }
            record.team = team;
        }
        if let Some(date) = changes.date {
            record.date = date;
        }
        if let Some(service) = changes.service {
            record.service = non_blank(&service, "service")?;
        }
        if let Some(time) = changes.time {
            record.time = non_blank(&time, "time")?;
        }
        if let Some(assignments) = changes.assignments {
            record.assignments = assignments;
        }
        if let Some(notes) = changes.notes {
            record.notes = notes.trim().to_string();
        }

        self.store.update_schedule(&record)?;
        log::debug!("updated schedule {}", record.schedule_id);
        Ok(record)
    }

    pub fn delete_schedule(&self, caller: &Caller, schedule_id: &str) -> RosterResult<()> {
        let record = self
            .store
            .get_schedule(schedule_id)?
            .ok_or_else(|| RosterError::ScheduleNotFound(schedule_id.to_string()))?;
        caller.authorize_modify(&record.team)?;
        self.store.delete_schedule(schedule_id)?;
        log::debug!("deleted schedule {schedule_id}");
        Ok(())
    }

    // ── Listings ──────────────────────────────────────────────

    pub fn schedule(&self, schedule_id: &str) -> RosterResult<ScheduleRecord> {
        self.store
            .get_schedule(schedule_id)?
            .ok_or_else(|| RosterError::ScheduleNotFound(schedule_id.to_string()))
    }

    pub fn all_schedules(&self) -> RosterResult<Vec<ScheduleRecord>> {
        self.store.all_schedules()
    }

    /// Team-scoped listing, open to leaders and to members of that team.
    pub fn team_schedules(&self, caller: &Caller, team: &str) -> RosterResult<Vec<ScheduleRecord>> {
        if !caller.can_view_team(team) {
            return Err(RosterError::AccessDenied(
                "you can only view schedules for your own team".to_string(),
            ));
        }
        self.store.schedules_for_team(team)
    }

    pub fn filtered_schedules(&self, filter: &ScheduleFilter) -> RosterResult<Vec<ScheduleRecord>> {
        let all = self.store.all_schedules()?;
        Ok(projection::project(&all, filter))
    }

    pub fn existing_for_slot(&self, slot: &ScheduleSlot) -> RosterResult<Option<ScheduleRecord>> {
        self.store.find_by_slot(slot)
    }

    /// Schedules for one logical day of the week containing `reference`.
    pub fn week_view(&self, reference: NaiveDate, day: &str) -> RosterResult<Vec<ScheduleRecord>> {
        let date = week::date_for_logical_day(reference, day, &self.config.week)?;
        let filter = ScheduleFilter {
            date: Some(date),
            day: Some(day.to_string()),
            ..ScheduleFilter::default()
        };
        self.filtered_schedules(&filter)
    }

    /// Complete, ordered roster for a record against the team catalog.
    /// Teams that have left the catalog merge to an empty roster.
    pub fn roster_for(&self, record: &ScheduleRecord) -> Vec<RoleAssignment> {
        let roles = self.config.roles_for(&record.team).unwrap_or(&[]);
        merge_assignments(roles, &record.assignments)
    }
}

/// Trimmed copy of a required label. A label left blank would carve an
/// empty segment into the slot key.
fn non_blank(value: &str, field: &'static str) -> RosterResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
