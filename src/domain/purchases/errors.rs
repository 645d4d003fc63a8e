//! Purchases service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum PurchasesServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("corrupt persisted purchase history")]
    Serde(#[from] serde_json::Error),
}
