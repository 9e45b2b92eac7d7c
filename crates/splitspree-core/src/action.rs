//! The closed set of state-mutating commands.
//!
//! Every command the presentation layer or the chat assistant can issue is a
//! variant here, each carrying only its required fields, so command handling
//! is exhaustiveness-checked at compile time. The serde encoding matches the
//! `{type, payload}` JSON shape the assistant service emits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use splitspree_domain::{ReceiptDraft, User};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Appends a user to the group. The payload is the user itself.
    AddUser(User),
    /// Creates a receipt plus one unassigned item per extracted line.
    /// `payer_id` should reference a known user but this is not enforced.
    #[serde(rename_all = "camelCase")]
    AddReceipt {
        receipt_data: ReceiptDraft,
        #[serde(default)]
        payer_id: Option<Uuid>,
    },
    /// Adds a user to an item's assignees. Idempotent.
    #[serde(rename_all = "camelCase")]
    AssignItem { item_id: Uuid, user_id: Uuid },
    /// Removes a user from an item's assignees.
    #[serde(rename_all = "camelCase")]
    UnassignItem { item_id: Uuid, user_id: Uuid },
    /// Replaces an item's assignee set wholesale.
    #[serde(rename_all = "camelCase")]
    SetItemAssignees { item_id: Uuid, user_ids: Vec<Uuid> },
    /// Replaces an item's price.
    #[serde(rename_all = "camelCase")]
    SetItemPrice { item_id: Uuid, price: f64 },
    /// Replaces a receipt's payer.
    #[serde(rename_all = "camelCase")]
    SetReceiptPayer {
        receipt_id: Uuid,
        #[serde(default)]
        payer_id: Option<Uuid>,
    },
    /// Sets every item's assignees to the given user set.
    #[serde(rename_all = "camelCase")]
    AssignAllItems { user_ids: Vec<Uuid> },
    /// Clears assignees on one item (`item_id`) or several (`item_ids`).
    /// With neither present the command is a no-op.
    #[serde(rename_all = "camelCase")]
    ClearItemAssignees {
        #[serde(default)]
        item_id: Option<Uuid>,
        #[serde(default)]
        item_ids: Option<Vec<Uuid>>,
    },
    /// Records a percentage split. Only equal-split membership is persisted;
    /// the percentages remain the command's rationale.
    #[serde(rename_all = "camelCase")]
    SplitItemPercent {
        item_id: Uuid,
        percentages: Vec<PercentShare>,
    },
    /// Records an amount split. Only equal-split membership is persisted;
    /// the amounts remain the command's rationale.
    #[serde(rename_all = "camelCase")]
    SplitItemAmount {
        item_id: Uuid,
        amounts: Vec<AmountShare>,
    },
    /// Clears assignees on every item.
    ResetAllSplits {},
    /// No-op: action history is not tracked in the current scope.
    UndoLastAction {},
}

impl Action {
    /// Stable label for logging and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddUser(_) => "ADD_USER",
            Action::AddReceipt { .. } => "ADD_RECEIPT",
            Action::AssignItem { .. } => "ASSIGN_ITEM",
            Action::UnassignItem { .. } => "UNASSIGN_ITEM",
            Action::SetItemAssignees { .. } => "SET_ITEM_ASSIGNEES",
            Action::SetItemPrice { .. } => "SET_ITEM_PRICE",
            Action::SetReceiptPayer { .. } => "SET_RECEIPT_PAYER",
            Action::AssignAllItems { .. } => "ASSIGN_ALL_ITEMS",
            Action::ClearItemAssignees { .. } => "CLEAR_ITEM_ASSIGNEES",
            Action::SplitItemPercent { .. } => "SPLIT_ITEM_PERCENT",
            Action::SplitItemAmount { .. } => "SPLIT_ITEM_AMOUNT",
            Action::ResetAllSplits {} => "RESET_ALL_SPLITS",
            Action::UndoLastAction {} => "UNDO_LAST_ACTION",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One user's claimed percentage of a split item.
pub struct PercentShare {
    pub user_id: Uuid,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One user's claimed fixed amount of a split item.
pub struct AmountShare {
    pub user_id: Uuid,
    pub amount: f64,
}
