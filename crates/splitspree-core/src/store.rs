//! The state reducer: the only writer of [`AppState`].
//!
//! [`apply`] is total and deterministic. Commands that reference unknown ids
//! are absorbed (the previous snapshot is returned unchanged) instead of
//! surfacing an error; a stale command must never crash the session.

use tracing::{debug, warn};
use uuid::Uuid;

use splitspree_domain::{AppState, Item, Receipt, ReceiptDraft};

use crate::action::Action;

/// Applies one command to a snapshot, producing the next snapshot.
///
/// The input state is never mutated; callers replace their current snapshot
/// with the returned value atomically.
pub fn apply(state: &AppState, action: &Action) -> AppState {
    debug!(kind = action.kind(), "applying action");
    let mut next = state.clone();
    match action {
        Action::AddUser(user) => {
            next.add_user(user.clone());
        }
        Action::AddReceipt {
            receipt_data,
            payer_id,
        } => {
            insert_receipt(&mut next, receipt_data, *payer_id);
        }
        Action::AssignItem { item_id, user_id } => match next.item_mut(*item_id) {
            Some(item) => item.assign(*user_id),
            None => absorb("ASSIGN_ITEM", *item_id),
        },
        Action::UnassignItem { item_id, user_id } => match next.item_mut(*item_id) {
            Some(item) => item.unassign(*user_id),
            None => absorb("UNASSIGN_ITEM", *item_id),
        },
        Action::SetItemAssignees { item_id, user_ids } => match next.item_mut(*item_id) {
            Some(item) => item.set_assignees(user_ids),
            None => absorb("SET_ITEM_ASSIGNEES", *item_id),
        },
        Action::SetItemPrice { item_id, price } => match next.item_mut(*item_id) {
            Some(item) => item.price = *price,
            None => absorb("SET_ITEM_PRICE", *item_id),
        },
        Action::SetReceiptPayer {
            receipt_id,
            payer_id,
        } => match next.receipt_mut(*receipt_id) {
            Some(receipt) => receipt.payer_id = *payer_id,
            None => absorb("SET_RECEIPT_PAYER", *receipt_id),
        },
        Action::AssignAllItems { user_ids } => {
            for item in next.items.values_mut() {
                item.set_assignees(user_ids);
            }
        }
        Action::ClearItemAssignees { item_id, item_ids } => {
            if let Some(id) = item_id {
                match next.item_mut(*id) {
                    Some(item) => item.user_ids.clear(),
                    None => absorb("CLEAR_ITEM_ASSIGNEES", *id),
                }
            } else if let Some(ids) = item_ids {
                for id in ids {
                    if let Some(item) = next.item_mut(*id) {
                        item.user_ids.clear();
                    }
                }
            }
        }
        Action::SplitItemPercent {
            item_id,
            percentages,
        } => {
            let members: Vec<Uuid> = percentages.iter().map(|share| share.user_id).collect();
            match next.item_mut(*item_id) {
                Some(item) => item.set_assignees(&members),
                None => absorb("SPLIT_ITEM_PERCENT", *item_id),
            }
        }
        Action::SplitItemAmount { item_id, amounts } => {
            let members: Vec<Uuid> = amounts.iter().map(|share| share.user_id).collect();
            match next.item_mut(*item_id) {
                Some(item) => item.set_assignees(&members),
                None => absorb("SPLIT_ITEM_AMOUNT", *item_id),
            }
        }
        Action::ResetAllSplits {} => {
            for item in next.items.values_mut() {
                item.user_ids.clear();
            }
        }
        // History is not tracked in the current scope.
        Action::UndoLastAction {} => {}
    }
    next
}

fn insert_receipt(state: &mut AppState, draft: &ReceiptDraft, payer_id: Option<Uuid>) {
    let receipt_id = Uuid::new_v4();
    let mut item_ids = Vec::with_capacity(draft.items.len());
    for line in &draft.items {
        let item = Item::new(receipt_id, &line.name, line.price, &line.description);
        item_ids.push(item.id);
        state.items.insert(item.id, item);
    }
    let receipt = Receipt {
        id: receipt_id,
        store_name: draft.store_name.clone(),
        date: draft.date.clone(),
        item_ids,
        subtotal: draft.subtotal,
        tax: draft.tax,
        tip: draft.tip,
        total: draft.total,
        payer_id,
    };
    state.receipts.insert(receipt_id, receipt);
}

fn absorb(kind: &str, id: Uuid) {
    warn!(kind, %id, "command references unknown id; absorbed");
}

/// Owns the current session snapshot and funnels every mutation through
/// [`apply`]. The hosting layer reads via [`Session::state`] and never
/// mutates the snapshot directly.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: AppState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Replaces the current snapshot with the result of applying `action`.
    pub fn dispatch(&mut self, action: &Action) {
        self.state = apply(&self.state, action);
    }
}
