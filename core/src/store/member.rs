//! Membership directory queries.

use super::RosterStore;
use crate::auth::{Member, MemberRole};
use crate::error::RosterResult;
use rusqlite::{params, OptionalExtension};
use std::str::FromStr;

impl RosterStore {
    pub fn insert_member(&self, member: &Member) -> RosterResult<()> {
        self.conn.execute(
            "INSERT INTO member (member_id, username, email, name, role, team, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &member.member_id,
                &member.username,
                &member.email,
                &member.name,
                member.role.to_string(),
                &member.team,
                if member.active { 1 } else { 0 },
            ],
        )?;
        Ok(())
    }

    pub fn member_by_username(&self, username: &str) -> RosterResult<Option<Member>> {
        let result = self
            .conn
            .query_row(
                "SELECT member_id, username, email, name, role, team, active
                 FROM member WHERE username = ?1",
                params![username],
                Self::member_row,
            )
            .optional()?;
        Ok(result)
    }

    pub fn username_taken(&self, username: &str) -> RosterResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM member WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn email_taken(&self, email: &str) -> RosterResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM member WHERE email = ?1",
            params![email],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Active members (not leaders) of one team, for assignee pickers.
    pub fn team_members(&self, team: &str) -> RosterResult<Vec<Member>> {
        let mut stmt = self.conn.prepare(
            "SELECT member_id, username, email, name, role, team, active
             FROM member
             WHERE team = ?1 AND role = 'team_member' AND active = 1
             ORDER BY name ASC",
        )?;
        let members = stmt
            .query_map(params![team], Self::member_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(members)
    }

    pub fn set_member_active(&self, member_id: &str, active: bool) -> RosterResult<()> {
        self.conn.execute(
            "UPDATE member SET active = ?2 WHERE member_id = ?1",
            params![member_id, if active { 1 } else { 0 }],
        )?;
        Ok(())
    }

    pub fn member_count(&self) -> RosterResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM member", [], |row| row.get(0))?;
        Ok(count)
    }

    fn member_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Member> {
        let role_text: String = row.get(4)?;
        let role = MemberRole::from_str(&role_text).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(Member {
            member_id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            name: row.get(3)?,
            role,
            team: row.get(5)?,
            active: row.get::<_, i32>(6)? != 0,
        })
    }
}
