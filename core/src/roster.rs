//! Assignment merging.
//!
//! Stored assignment maps are sparse: a roster may cover only some of a
//! team's roles, and may still carry keys for roles that have since left
//! the catalog. Merging against the canonical role list produces the
//! complete, ordered view the display layer works from.

use crate::types::RoleName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label shown for a role nobody has been given yet.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// One role slot in a merged roster. `name` is empty when unassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: RoleName,
    pub name: String,
}

impl RoleAssignment {
    /// Display name, with the unassigned label substituted for "".
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNASSIGNED_LABEL
        } else {
            &self.name
        }
    }
}

/// Merge a stored assignment map against the canonical role list.
///
/// The result has exactly the canonical roles, in catalog order. Roles
/// absent from the stored map come back with an empty name; stored keys
/// outside the catalog are dropped. An empty catalog merges to an empty
/// roster.
pub fn merge_assignments(
    canonical_roles: &[RoleName],
    stored: &HashMap<RoleName, String>,
) -> Vec<RoleAssignment> {
    canonical_roles
        .iter()
        .map(|role| RoleAssignment {
            role: role.clone(),
            name: stored.get(role).cloned().unwrap_or_default(),
        })
        .collect()
}
