//! Itemized per-user breakdowns for the final summary view.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use splitspree_domain::AppState;

use crate::balance::total_paid;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One assigned item's equal-split share for a given user.
pub struct ItemShare {
    pub item_id: Uuid,
    pub name: String,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A user's stake in one receipt: their item shares plus the tax and tip
/// slices allocated by their fraction of the live receipt subtotal.
pub struct ReceiptShare {
    pub receipt_id: Uuid,
    pub store_name: String,
    pub items: Vec<ItemShare>,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Complete breakdown for one user: per-receipt detail plus grand totals.
/// `total_owed` always equals `subtotal + tax + tip`.
pub struct UserSummary {
    pub user_id: Uuid,
    pub user_name: String,
    pub receipts: Vec<ReceiptShare>,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub total_owed: f64,
    pub total_paid: f64,
    pub balance: f64,
}

/// Builds the itemized breakdown for `user_id`.
///
/// Receipt groups are sorted by store name (then id) and items keep receipt
/// line order, so the output is deterministic. Items whose owning receipt is
/// missing are skipped, mirroring the settlement view of such states as
/// diagnosable-but-tolerated (see [`crate::validate::state_warnings`]).
pub fn user_summary(state: &AppState, user_id: Uuid) -> CoreResult<UserSummary> {
    let user = state
        .user(user_id)
        .ok_or(CoreError::UserNotFound(user_id))?;

    let mut receipts: Vec<ReceiptShare> = Vec::new();
    for receipt in state.receipts.values() {
        let items: Vec<ItemShare> = state
            .receipt_items(receipt)
            .filter(|item| item.is_assigned_to(user_id))
            .map(|item| ItemShare {
                item_id: item.id,
                name: item.name.clone(),
                share: item.price / item.split_count() as f64,
            })
            .collect();
        if items.is_empty() {
            continue;
        }

        let user_subtotal: f64 = items.iter().map(|entry| entry.share).sum();
        let live_subtotal = state.live_subtotal(receipt);
        let portion = if live_subtotal > 0.0 {
            user_subtotal / live_subtotal
        } else {
            0.0
        };

        receipts.push(ReceiptShare {
            receipt_id: receipt.id,
            store_name: receipt.store_name.clone(),
            items,
            subtotal: user_subtotal,
            tax: receipt.tax * portion,
            tip: receipt.tip * portion,
        });
    }
    receipts.sort_by(|a, b| {
        (a.store_name.as_str(), a.receipt_id).cmp(&(b.store_name.as_str(), b.receipt_id))
    });

    let subtotal: f64 = receipts.iter().map(|r| r.subtotal).sum();
    let tax: f64 = receipts.iter().map(|r| r.tax).sum();
    let tip: f64 = receipts.iter().map(|r| r.tip).sum();
    let total_owed = subtotal + tax + tip;
    let total_paid = total_paid(state, user_id);

    Ok(UserSummary {
        user_id,
        user_name: user.name.clone(),
        receipts,
        subtotal,
        tax,
        tip,
        total_owed,
        total_paid,
        balance: total_paid - total_owed,
    })
}
