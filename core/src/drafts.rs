//! In-progress roster edits, staged before anything is persisted.
//!
//! Drafts are keyed by the slot key, so revisiting the same sitting
//! resumes the same draft instead of starting over.

use crate::roster::{merge_assignments, RoleAssignment};
use crate::types::RoleName;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct DraftBoard {
    drafts: HashMap<String, HashMap<RoleName, String>>,
}

impl DraftBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a draft from a stored assignment map, only when no draft
    /// for the slot exists yet. Edits in progress are never overwritten.
    pub fn load_existing(&mut self, slot_key: &str, stored: &HashMap<RoleName, String>) {
        if self.drafts.contains_key(slot_key) {
            return;
        }
        self.drafts.insert(slot_key.to_string(), stored.clone());
    }

    /// Stage one role for the slot. An empty name clears the role.
    pub fn stage(&mut self, slot_key: &str, role: &str, name: &str) {
        let draft = self.drafts.entry(slot_key.to_string()).or_default();
        if name.is_empty() {
            draft.remove(role);
        } else {
            draft.insert(role.to_string(), name.to_string());
        }
    }

    /// Complete, ordered view of the slot's draft against the canonical
    /// role list. Slots never touched show every role unassigned.
    pub fn merged(&self, slot_key: &str, canonical_roles: &[RoleName]) -> Vec<RoleAssignment> {
        match self.drafts.get(slot_key) {
            Some(draft) => merge_assignments(canonical_roles, draft),
            None => merge_assignments(canonical_roles, &HashMap::new()),
        }
    }

    /// Raw staged assignments for the slot, if any.
    pub fn staged(&self, slot_key: &str) -> Option<&HashMap<RoleName, String>> {
        self.drafts.get(slot_key)
    }

    /// Remove and return the slot's staged assignments.
    pub fn take(&mut self, slot_key: &str) -> Option<HashMap<RoleName, String>> {
        self.drafts.remove(slot_key)
    }

    pub fn discard(&mut self, slot_key: &str) {
        self.drafts.remove(slot_key);
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
