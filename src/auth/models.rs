//! Auth data models.

use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<Account>;

/// Public account profile; never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,
}

/// Persisted account credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AccountRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,
    pub password_digest: String,
}

impl AccountRecord {
    /// The public profile view of this account.
    pub(crate) fn profile(&self) -> Account {
        Account {
            uuid: self.uuid,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Profile fields mergeable into the active account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
}
