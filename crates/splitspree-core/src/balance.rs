//! Per-user net balance computation.
//!
//! A user's balance is everything they paid minus everything they owe, where
//! each assigned item contributes its equal share plus a proportional slice
//! of the owning receipt's tax and tip. The tax/tip ratio is computed from
//! the receipt's *live* item prices, so a price edit reshapes the allocation
//! for every item on that receipt.

use uuid::Uuid;

use splitspree_domain::{AppState, Receipt};

/// One user's net position. Positive means the group owes them money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserBalance {
    pub user_id: Uuid,
    pub balance: f64,
}

/// Computes every user's net balance, in user encounter order.
///
/// The order is load-bearing: settlement matches debtors and creditors in
/// exactly this order, which keeps its output deterministic.
pub fn compute_balances(state: &AppState) -> Vec<UserBalance> {
    state
        .users
        .iter()
        .map(|user| UserBalance {
            user_id: user.id,
            balance: total_paid(state, user.id) - total_owed(state, user.id),
        })
        .collect()
}

/// Sum of receipt totals paid by `user_id`.
pub fn total_paid(state: &AppState, user_id: Uuid) -> f64 {
    state
        .receipts_paid_by(user_id)
        .map(|receipt| receipt.total)
        .sum()
}

/// Sum of the user's item shares plus proportional tax/tip surcharges.
pub fn total_owed(state: &AppState, user_id: Uuid) -> f64 {
    state
        .items_assigned_to(user_id)
        .map(|item| {
            let share = item.price / item.split_count() as f64;
            match state.receipt(item.receipt_id) {
                Some(receipt) => share + surcharge(state, receipt, item.price, item.split_count()),
                // Dangling receipt reference: the bare share still counts.
                None => share,
            }
        })
        .sum()
}

fn surcharge(state: &AppState, receipt: &Receipt, item_price: f64, split_count: usize) -> f64 {
    let live_subtotal = state.live_subtotal(receipt);
    if live_subtotal > 0.0 {
        let ratio = receipt.tax_and_tip() / live_subtotal;
        (item_price * ratio) / split_count as f64
    } else {
        0.0
    }
}
