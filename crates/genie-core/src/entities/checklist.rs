use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemAction;
use crate::errors::CoreError;
use crate::ids::{self, PREFIX_CHECKLIST, PREFIX_ITEM};
use crate::protocol::ChecklistUpdate;

/// One entry of a group checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub added_by: String,
    pub added_at: DateTime<Utc>,
    pub completed_by: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ChecklistItem {
    /// Create an open item.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `text` is blank.
    pub fn new(text: &str, added_by: &str) -> Result<Self, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation("item text must not be blank".into()));
        }
        Ok(Self {
            id: ids::generate_id(PREFIX_ITEM),
            text: text.to_string(),
            completed: false,
            added_by: added_by.to_string(),
            added_at: Utc::now(),
            completed_by: None,
            completed_at: None,
        })
    }

    /// Flip `completed`. Completing stamps who and when; reopening clears both.
    pub fn toggle(&mut self, actor: &str, at: DateTime<Utc>) {
        self.completed = !self.completed;
        if self.completed {
            self.completed_by = Some(actor.to_string());
            self.completed_at = Some(at);
        } else {
            self.completed_by = None;
            self.completed_at = None;
        }
    }
}

/// A shared to-do list tied to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub share_id: String,
    pub members: Vec<String>,
    pub items: Vec<ChecklistItem>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

const fn default_public() -> bool {
    true
}

impl Checklist {
    /// Create an empty checklist owned by `created_by`, who is also its first member.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `name` is blank.
    pub fn new(name: &str, created_by: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation(
                "checklist name must not be blank".into(),
            ));
        }
        Ok(Self {
            id: ids::generate_id(PREFIX_CHECKLIST),
            name: name.to_string(),
            created_by: created_by.to_string(),
            created_at: Utc::now(),
            share_id: ids::share_token(),
            members: vec![created_by.to_string()],
            items: Vec::new(),
            is_public: true,
        })
    }

    /// Append a new item.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `text` is blank.
    pub fn add_item(&mut self, text: &str, added_by: &str) -> Result<&ChecklistItem, CoreError> {
        let item = ChecklistItem::new(text, added_by)?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Toggle an item on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no item has `item_id`.
    pub fn toggle_item(&mut self, item_id: &str, actor: &str) -> Result<&ChecklistItem, CoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| CoreError::not_found("checklist item", item_id))?;
        item.toggle(actor, Utc::now());
        Ok(item)
    }

    /// Remove an item and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no item has `item_id`.
    pub fn remove_item(&mut self, item_id: &str) -> Result<ChecklistItem, CoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| CoreError::not_found("checklist item", item_id))?;
        Ok(self.items.remove(index))
    }

    /// Add `member` unless already present. Returns whether it was added.
    pub fn add_member(&mut self, member: &str) -> bool {
        if self.members.iter().any(|m| m == member) {
            return false;
        }
        self.members.push(member.to_string());
        true
    }

    /// Apply an update received from another session.
    ///
    /// Last write observed wins: the incoming item replaces the local copy with
    /// the same id wholesale, unknown items are appended, and `removed` drops
    /// the item if present. Updates addressed to another checklist are ignored
    /// and reported as `false`.
    pub fn apply_update(&mut self, update: &ChecklistUpdate) -> bool {
        if update.checklist_id != self.id {
            return false;
        }
        let existing = self.items.iter().position(|item| item.id == update.item.id);
        match (update.action, existing) {
            (ItemAction::Removed, Some(index)) => {
                self.items.remove(index);
            }
            (ItemAction::Removed, None) => {}
            (_, Some(index)) => self.items[index] = update.item.clone(),
            (_, None) => self.items.push(update.item.clone()),
        }
        true
    }

    /// Percentage of completed items, rounded. An empty list is 0%.
    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let done = self.items.iter().filter(|item| item.completed).count();
        let pct = (done * 100 + self.items.len() / 2) / self.items.len();
        u8::try_from(pct).unwrap_or(100)
    }

    /// Shareable URL for this checklist under `origin`.
    #[must_use]
    pub fn share_url(&self, origin: &str) -> String {
        format!(
            "{}/group/shared/{}",
            origin.trim_end_matches('/'),
            self.share_id
        )
    }
}
