//! MediaRoster core: scheduling logic for church media teams.
//!
//! Weekend service rosters hang off a mid-week anchor day. This crate
//! owns the week arithmetic, slot identity, assignment merging and
//! filtered listings, plus the SQLite store and the policy rules that
//! guard every mutation. Binaries stay thin on top of
//! [`desk::ScheduleDesk`].

pub mod auth;
pub mod config;
pub mod desk;
pub mod drafts;
pub mod error;
pub mod model;
pub mod projection;
pub mod roster;
pub mod slot;
pub mod store;
pub mod types;
pub mod week;
