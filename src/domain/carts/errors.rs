//! Cart service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("corrupt persisted cart")]
    Serde(#[from] serde_json::Error),
}
