//! Products service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product price cannot be negative")]
    InvalidPrice,

    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("corrupt persisted catalog")]
    Serde(#[from] serde_json::Error),
}
