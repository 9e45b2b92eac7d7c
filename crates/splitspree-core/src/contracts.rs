//! Contracts with the external AI collaborators.
//!
//! The core never calls these services itself; the hosting layer implements
//! the traits against whatever transport it uses and feeds the resolved
//! results back in as [`ReceiptDraft`] values and [`Action`]s. Confirmation
//! gating for assistant actions also lives with the hosting layer.

use serde::{Deserialize, Serialize};

use splitspree_domain::{AppState, ReceiptDraft};

use crate::action::Action;
use crate::error::CoreResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Output of the Command Interpretation Service: a conversational reply,
/// optionally paired with an action the user must confirm before dispatch.
pub struct AssistantReply {
    pub response_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_to_confirm: Option<Action>,
}

/// Abstraction over the Receipt Extraction Service: image in, structured
/// line items out.
pub trait ReceiptExtractor: Send + Sync {
    /// `image_data_uri` is a data URI with MIME type and Base64 payload.
    fn extract(&self, image_data_uri: &str) -> CoreResult<ReceiptDraft>;
}

/// Abstraction over the Command Interpretation Service: free text plus the
/// current snapshot in, a reply with an optional action out.
pub trait ChatAssistant: Send + Sync {
    fn interpret(&self, message: &str, state: &AppState) -> CoreResult<AssistantReply>;
}
