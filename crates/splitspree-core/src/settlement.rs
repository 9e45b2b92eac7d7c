//! Greedy reduction of net balances into pairwise transfers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::balance::UserBalance;

/// Residue below which a party counts as settled.
const SETTLED_EPSILON: f64 = 0.01;
/// Smallest transfer worth emitting; filters zero/dust instructions.
const MIN_TRANSFER: f64 = 0.005;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// A directed payment instruction: `from` pays `to`.
pub struct Transfer {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: f64,
}

/// Reduces balances to a short list of transfers that settles every user to
/// within [`SETTLED_EPSILON`].
///
/// Greedy matching: the first outstanding debtor pays the first outstanding
/// creditor as much as either side can absorb. Parties keep their encounter
/// order, so the output is deterministic for a given balance order. This is
/// not guaranteed minimal in transfer count, only close to it.
pub fn settle(balances: &[UserBalance]) -> Vec<Transfer> {
    let mut debtors: Vec<UserBalance> = balances
        .iter()
        .filter(|b| b.balance < 0.0 && b.balance.abs() >= SETTLED_EPSILON)
        .copied()
        .collect();
    let mut creditors: Vec<UserBalance> = balances
        .iter()
        .filter(|b| b.balance > 0.0 && b.balance.abs() >= SETTLED_EPSILON)
        .copied()
        .collect();

    let mut transfers = Vec::new();
    while !debtors.is_empty() && !creditors.is_empty() {
        let debtor = &mut debtors[0];
        let creditor = &mut creditors[0];
        let amount = (-debtor.balance).min(creditor.balance);

        if amount > MIN_TRANSFER {
            transfers.push(Transfer {
                from: debtor.user_id,
                to: creditor.user_id,
                amount,
            });
        }

        debtor.balance += amount;
        creditor.balance -= amount;

        if debtors[0].balance.abs() < SETTLED_EPSILON {
            debtors.remove(0);
        }
        if creditors[0].balance.abs() < SETTLED_EPSILON {
            creditors.remove(0);
        }
    }
    transfers
}
