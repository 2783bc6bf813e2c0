//! Membership directory and caller policy.
//!
//! RULE: every mutation goes through a Caller policy check.
//! The store never second-guesses authorization.

use crate::error::{RosterError, RosterResult};
use crate::types::{MemberId, TeamName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    TeamLeader,
    TeamMember,
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberRole::TeamLeader => write!(f, "team_leader"),
            MemberRole::TeamMember => write!(f, "team_member"),
        }
    }
}

impl FromStr for MemberRole {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team_leader" => Ok(MemberRole::TeamLeader),
            "team_member" => Ok(MemberRole::TeamMember),
            other => Err(RosterError::InvalidField {
                field: "role",
                reason: format!("unknown role '{other}'"),
            }),
        }
    }
}

/// A registered member of the serving directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub username:  String,
    pub email:     String,
    pub name:      String,
    pub role:      MemberRole,
    pub team:      TeamName,
    pub active:    bool,
}

/// Fields supplied at registration. Username and email are lowercased
/// before storage; `active` starts true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub username: String,
    pub email:    String,
    pub name:     String,
    pub role:     MemberRole,
    pub team:     TeamName,
}

/// The acting identity behind a request, as the auth layer reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caller {
    pub name: String,
    pub role: MemberRole,
    pub team: TeamName,
}

impl Caller {
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role,
            team: member.team.clone(),
        }
    }

    pub fn is_leader(&self) -> bool {
        self.role == MemberRole::TeamLeader
    }

    /// Creating, updating and deleting schedules is leader-only, and a
    /// leader acts only for their own team.
    pub fn authorize_modify(&self, team: &str) -> RosterResult<()> {
        if !self.is_leader() {
            return Err(RosterError::AccessDenied(
                "team leader role required".to_string(),
            ));
        }
        if self.team != team {
            return Err(RosterError::AccessDenied(format!(
                "leaders of {} cannot modify schedules for {team}",
                self.team
            )));
        }
        Ok(())
    }

    /// Team-scoped reads: leaders see any team, members only their own.
    pub fn can_view_team(&self, team: &str) -> bool {
        self.is_leader() || self.team == team
    }
}
