use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("User not found: {0}")]
    UserNotFound(Uuid),
    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),
    #[error("Receipt not found: {0}")]
    ReceiptNotFound(Uuid),
    #[error("Receipt extraction failed: {0}")]
    Extraction(String),
    #[error("Assistant request failed: {0}")]
    Assistant(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
