//! Catalog and week configuration.
//!
//! Teams, their canonical role lists, the service catalog and the week
//! anchor all live in JSON under the data/ directory. Adding a team, a
//! role or a logical day is a data change, never a code change.

use crate::error::{RosterError, RosterResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    /// Canonical roles, in display order.
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TeamCatalogFile {
    teams: Vec<TeamConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    /// Display time labels for each sitting of this service.
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayServices {
    pub day: String,
    pub services: Vec<ServiceConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceCatalogFile {
    days: Vec<DayServices>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOffsetEntry {
    pub day: String,
    /// Days after the anchor weekday.
    pub offset: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct WeekConfigFile {
    anchor: String,
    days: Vec<DayOffsetEntry>,
}

/// Week shape: the anchor weekday a reference date walks back to, and
/// the configured logical days as offsets from that anchor.
#[derive(Debug, Clone)]
pub struct WeekConfig {
    pub anchor: Weekday,
    pub day_offsets: Vec<DayOffsetEntry>,
}

impl WeekConfig {
    pub fn offset_for(&self, day: &str) -> RosterResult<i64> {
        self.day_offsets
            .iter()
            .find(|entry| entry.day == day)
            .map(|entry| entry.offset)
            .ok_or_else(|| RosterError::UnknownLogicalDay(day.to_string()))
    }

    pub fn is_logical_day(&self, day: &str) -> bool {
        self.day_offsets.iter().any(|entry| entry.day == day)
    }
}

#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub teams: Vec<TeamConfig>,
    pub services: Vec<DayServices>,
    pub week: WeekConfig,
}

impl RosterConfig {
    /// Load from the data/ directory.
    /// In tests, use RosterConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let team_path = format!("{data_dir}/teams/team_catalog.json");
        let team_content = std::fs::read_to_string(&team_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {team_path}: {e}"))?;
        let team_file: TeamCatalogFile = serde_json::from_str(&team_content)?;

        let service_path = format!("{data_dir}/services/service_catalog.json");
        let service_content = std::fs::read_to_string(&service_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {service_path}: {e}"))?;
        let service_file: ServiceCatalogFile = serde_json::from_str(&service_content)?;

        let week_path = format!("{data_dir}/week/week_config.json");
        let week_content = std::fs::read_to_string(&week_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {week_path}: {e}"))?;
        let week_file: WeekConfigFile = serde_json::from_str(&week_content)?;
        let anchor = week_file.anchor.parse::<Weekday>().map_err(|_| {
            anyhow::anyhow!(
                "Unknown anchor weekday '{}' in {week_path}",
                week_file.anchor
            )
        })?;

        Ok(Self {
            teams: team_file.teams,
            services: service_file.days,
            week: WeekConfig {
                anchor,
                day_offsets: week_file.days,
            },
        })
    }

    /// Canonical role list for a team, in catalog order.
    pub fn roles_for(&self, team: &str) -> Option<&[String]> {
        self.teams
            .iter()
            .find(|t| t.name == team)
            .map(|t| t.roles.as_slice())
    }

    pub fn is_known_team(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t.name == team)
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(|t| t.name.as_str())
    }

    /// Services configured for a logical day, if any.
    pub fn services_for(&self, day: &str) -> Option<&[ServiceConfig]> {
        self.services
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.services.as_slice())
    }

    pub fn default_test() -> Self {
        Self {
            teams: vec![
                TeamConfig {
                    name: "Video Team".into(),
                    roles: vec![
                        "Operation Director".into(),
                        "Operation Assistant".into(),
                        "Switcher 1".into(),
                        "Switcher 2".into(),
                        "C1".into(),
                        "C2".into(),
                        "C3".into(),
                        "C4".into(),
                        "C5".into(),
                        "C6".into(),
                        "Live Comment".into(),
                        "Media Maintenance".into(),
                    ],
                },
                TeamConfig {
                    name: "Photo Team".into(),
                    roles: vec!["Lead".into(), "Assist".into()],
                },
                TeamConfig {
                    name: "VJ Team".into(),
                    roles: vec!["Lead".into(), "Assist".into(), "Trainee".into()],
                },
                TeamConfig {
                    name: "Lighting Team".into(),
                    roles: vec!["Lead".into(), "Assist".into(), "Trainee".into()],
                },
            ],
            services: vec![
                DayServices {
                    day: "saturday".into(),
                    services: vec![
                        ServiceConfig {
                            name: "Fasting Service".into(),
                            times: vec!["9 AM".into()],
                        },
                        ServiceConfig {
                            name: "The Arrow Service".into(),
                            times: vec!["2 PM".into()],
                        },
                    ],
                },
                DayServices {
                    day: "sunday".into(),
                    services: vec![
                        ServiceConfig {
                            name: "Main Service".into(),
                            times: vec!["9 AM".into(), "12 PM".into(), "3 PM".into()],
                        },
                        ServiceConfig {
                            name: "Children Service".into(),
                            times: vec!["9 AM".into()],
                        },
                    ],
                },
            ],
            week: WeekConfig {
                anchor: Weekday::Wed,
                day_offsets: vec![
                    DayOffsetEntry {
                        day: "saturday".into(),
                        offset: 3,
                    },
                    DayOffsetEntry {
                        day: "sunday".into(),
                        offset: 4,
                    },
                ],
            },
        }
    }
}
