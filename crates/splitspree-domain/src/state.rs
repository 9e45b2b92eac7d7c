//! The aggregate session state and its lookup helpers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{item::Item, receipt::Receipt, user::User};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Aggregate root for one splitting session.
///
/// Mutation happens by computing a whole new snapshot from the previous one,
/// so every `AppState` value is a complete, consistent picture of the
/// session. `users` keeps encounter order, which is the deterministic order
/// used by balance and settlement output.
pub struct AppState {
    pub users: Vec<User>,
    pub receipts: HashMap<Uuid, Receipt>,
    pub items: HashMap<Uuid, Item>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn has_user(&self, id: Uuid) -> bool {
        self.user(id).is_some()
    }

    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    pub fn receipt(&self, id: Uuid) -> Option<&Receipt> {
        self.receipts.get(&id)
    }

    pub fn receipt_mut(&mut self, id: Uuid) -> Option<&mut Receipt> {
        self.receipts.get_mut(&id)
    }

    /// Appends a user to the group. Encounter order is preserved.
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Iterates a receipt's items in receipt line order, skipping dangling
    /// ids.
    pub fn receipt_items<'a>(&'a self, receipt: &'a Receipt) -> impl Iterator<Item = &'a Item> {
        receipt.item_ids.iter().filter_map(|id| self.items.get(id))
    }

    /// Sum of the receipt's item prices as they stand now, which may differ
    /// from the stored `subtotal` after price edits. Dangling ids count as
    /// zero.
    pub fn live_subtotal(&self, receipt: &Receipt) -> f64 {
        receipt
            .item_ids
            .iter()
            .map(|id| self.items.get(id).map_or(0.0, |item| item.price))
            .sum()
    }

    /// Items currently assigned to `user_id`, in arbitrary order.
    pub fn items_assigned_to(&self, user_id: Uuid) -> impl Iterator<Item = &Item> {
        self.items
            .values()
            .filter(move |item| item.is_assigned_to(user_id))
    }

    /// Receipts paid by `user_id`, in arbitrary order.
    pub fn receipts_paid_by(&self, user_id: Uuid) -> impl Iterator<Item = &Receipt> {
        self.receipts
            .values()
            .filter(move |receipt| receipt.payer_id == Some(user_id))
    }
}
