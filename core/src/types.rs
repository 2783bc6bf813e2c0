//! Shared primitive types used across the entire scheduling core.

/// A stable, unique identifier for a persisted schedule.
pub type ScheduleId = String;

/// A stable, unique identifier for a directory member.
pub type MemberId = String;

/// A team name as configured in the team catalog (e.g. "Video Team").
pub type TeamName = String;

/// A logical weekday label as configured in the week table
/// (e.g. "saturday").
pub type DayName = String;

/// A role within a team's canonical role list (e.g. "Switcher 1").
pub type RoleName = String;
