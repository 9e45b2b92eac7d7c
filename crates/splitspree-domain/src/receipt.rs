//! Domain models for uploaded receipts and the extraction-service contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One uploaded bill, owning an ordered set of items.
///
/// `item_ids` keeps receipt line order. `subtotal` is the figure printed on
/// the receipt at extraction time; live calculations re-sum item prices
/// instead of trusting it.
pub struct Receipt {
    pub id: Uuid,
    pub store_name: String,
    /// Free-text date as extracted from the receipt image; not guaranteed to
    /// be parseable.
    pub date: String,
    pub item_ids: Vec<Uuid>,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
    pub payer_id: Option<Uuid>,
}

impl Receipt {
    /// Combined surcharge printed on the receipt.
    pub fn tax_and_tip(&self) -> f64 {
        self.tax + self.tip
    }
}

impl Identifiable for Receipt {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Receipt {
    fn name(&self) -> &str {
        &self.store_name
    }
}

impl Displayable for Receipt {
    fn display_label(&self) -> String {
        format!("{} — ${:.2}", self.store_name, self.total)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Structured output of the Receipt Extraction Service, consumed verbatim by
/// the AddReceipt action. Field names follow the service's JSON contract.
pub struct ReceiptDraft {
    pub store_name: String,
    pub date: String,
    pub items: Vec<DraftItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One extracted line of a receipt draft. `price` is the line total,
/// quantity already accounted for.
pub struct DraftItem {
    pub name: String,
    pub price: f64,
    pub description: String,
}
