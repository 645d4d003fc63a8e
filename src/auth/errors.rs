//! Auth service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    EmailTaken,

    #[error("no active account")]
    NotLoggedIn,

    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("corrupt persisted account data")]
    Serde(#[from] serde_json::Error),
}
