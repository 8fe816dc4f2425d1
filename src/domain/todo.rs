//! Todo Entity
//!
//! A single activity on the list. Field names serialize in camelCase to match
//! the persisted layout.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::accessibility::Accessibility;
use super::activity_type::ActivityType;
use super::draft::TodoDraft;
use super::entity::Entity;

/// Opaque unique identifier (UUID v4 string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        TodoId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        TodoId(id.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Display text, never blank once stored
    pub activity: String,
    /// Non-negative amount
    pub price: f64,
    /// Category tag
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub booking_required: bool,
    pub accessibility: Accessibility,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create an uncompleted item from a draft
    pub fn from_draft(id: TodoId, draft: TodoDraft) -> Self {
        Self {
            id,
            activity: draft.activity,
            price: draft.price,
            activity_type: draft.activity_type,
            booking_required: draft.booking_required,
            accessibility: draft.accessibility,
            completed: false,
        }
    }

    /// Overwrite every draft-owned field, leaving `id` and `completed` alone
    pub fn apply_draft(&mut self, draft: TodoDraft) {
        self.activity = draft.activity;
        self.price = draft.price;
        self.activity_type = draft.activity_type;
        self.booking_required = draft.booking_required;
        self.accessibility = draft.accessibility;
    }

    /// Draft seeded from this item's current values
    pub fn to_draft(&self) -> TodoDraft {
        TodoDraft {
            activity: self.activity.clone(),
            price: self.price,
            activity_type: self.activity_type.clone(),
            booking_required: self.booking_required,
            accessibility: self.accessibility,
        }
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
