//! Domain model for receipt line items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A single line on a receipt, optionally split among assignees.
///
/// `user_ids` has set semantics: order is irrelevant, entries are unique, and
/// an empty set means the item is unassigned.
pub struct Item {
    pub id: Uuid,
    pub receipt_id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub user_ids: Vec<Uuid>,
}

impl Item {
    /// Fabricates a new unassigned item belonging to `receipt_id`.
    pub fn new(
        receipt_id: Uuid,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            receipt_id,
            name: name.into(),
            price,
            description: description.into(),
            user_ids: Vec::new(),
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.user_ids.is_empty()
    }

    pub fn is_assigned_to(&self, user_id: Uuid) -> bool {
        self.user_ids.contains(&user_id)
    }

    /// Number of ways the item price is divided. Never zero.
    pub fn split_count(&self) -> usize {
        self.user_ids.len().max(1)
    }

    /// Adds `user_id` to the assignee set if absent. Idempotent.
    pub fn assign(&mut self, user_id: Uuid) {
        if !self.is_assigned_to(user_id) {
            self.user_ids.push(user_id);
        }
    }

    /// Removes `user_id` from the assignee set if present.
    pub fn unassign(&mut self, user_id: Uuid) {
        self.user_ids.retain(|id| *id != user_id);
    }

    /// Replaces the assignee set wholesale, dropping duplicate ids while
    /// preserving first occurrence.
    pub fn set_assignees(&mut self, user_ids: &[Uuid]) {
        let mut unique = Vec::with_capacity(user_ids.len());
        for id in user_ids {
            if !unique.contains(id) {
                unique.push(*id);
            }
        }
        self.user_ids = unique;
    }
}

impl Identifiable for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Item {
    fn display_label(&self) -> String {
        format!("{} (${:.2})", self.name, self.price)
    }
}
