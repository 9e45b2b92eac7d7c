//! Consistency diagnostics for session snapshots.

use std::collections::HashSet;

use splitspree_domain::AppState;

/// Detects dangling references and other anomalies within a snapshot.
///
/// The reducer tolerates these states (it absorbs rather than rejects), so
/// this is the place a hosting layer can look when a session drifts. An
/// empty result means every invariant holds.
pub fn state_warnings(state: &AppState) -> Vec<String> {
    let user_ids: HashSet<_> = state.users.iter().map(|u| u.id).collect();
    let mut warnings = Vec::new();

    for item in state.items.values() {
        match state.receipt(item.receipt_id) {
            None => warnings.push(format!(
                "item {} references unknown receipt {}",
                item.id, item.receipt_id
            )),
            Some(receipt) if !receipt.item_ids.contains(&item.id) => warnings.push(format!(
                "item {} missing from its receipt {} line list",
                item.id, receipt.id
            )),
            Some(_) => {}
        }
        if item.price < 0.0 {
            warnings.push(format!("item {} has negative price {}", item.id, item.price));
        }
        let mut seen = HashSet::new();
        for assignee in &item.user_ids {
            if !user_ids.contains(assignee) {
                warnings.push(format!(
                    "item {} assigned to unknown user {}",
                    item.id, assignee
                ));
            }
            if !seen.insert(*assignee) {
                warnings.push(format!(
                    "item {} lists duplicate assignee {}",
                    item.id, assignee
                ));
            }
        }
    }

    for receipt in state.receipts.values() {
        for item_id in &receipt.item_ids {
            match state.item(*item_id) {
                None => warnings.push(format!(
                    "receipt {} references unknown item {}",
                    receipt.id, item_id
                )),
                Some(item) if item.receipt_id != receipt.id => warnings.push(format!(
                    "receipt {} lists item {} owned by receipt {}",
                    receipt.id, item_id, item.receipt_id
                )),
                Some(_) => {}
            }
        }
        if let Some(payer) = receipt.payer_id {
            if !user_ids.contains(&payer) {
                warnings.push(format!(
                    "receipt {} paid by unknown user {}",
                    receipt.id, payer
                ));
            }
        }
        for amount in [receipt.subtotal, receipt.tax, receipt.tip, receipt.total] {
            if amount < 0.0 {
                warnings.push(format!("receipt {} has a negative amount", receipt.id));
                break;
            }
        }
    }
    warnings
}
