//! Accounts and session persistence.

use crate::{
    auth::{
        errors::AuthServiceError,
        models::{Account, AccountRecord},
    },
    storage::Storage,
};

pub(crate) const ACCOUNTS_KEY: &str = "accounts";
pub(crate) const SESSION_KEY: &str = "session";

#[derive(Debug, Clone, Default)]
pub(crate) struct AuthRepository;

impl AuthRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load the persisted account list; `None` means nothing was ever stored.
    pub(crate) fn load_accounts(
        &self,
        storage: &dyn Storage,
    ) -> Result<Option<Vec<AccountRecord>>, AuthServiceError> {
        let Some(raw) = storage.get(ACCOUNTS_KEY)? else {
            return Ok(None);
        };

        let accounts: Vec<AccountRecord> = serde_json::from_str(&raw)?;
        tracing::debug!(count = accounts.len(), "loaded accounts");

        Ok(Some(accounts))
    }

    pub(crate) fn save_accounts(
        &self,
        storage: &dyn Storage,
        accounts: &[AccountRecord],
    ) -> Result<(), AuthServiceError> {
        let raw = serde_json::to_string(accounts)?;
        storage.set(ACCOUNTS_KEY, &raw)?;

        Ok(())
    }

    /// Load the active account pointer, if a session is persisted.
    pub(crate) fn load_session(
        &self,
        storage: &dyn Storage,
    ) -> Result<Option<Account>, AuthServiceError> {
        let Some(raw) = storage.get(SESSION_KEY)? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub(crate) fn save_session(
        &self,
        storage: &dyn Storage,
        account: &Account,
    ) -> Result<(), AuthServiceError> {
        let raw = serde_json::to_string(account)?;
        storage.set(SESSION_KEY, &raw)?;

        Ok(())
    }

    pub(crate) fn clear_session(&self, storage: &dyn Storage) -> Result<(), AuthServiceError> {
        storage.remove(SESSION_KEY)?;

        Ok(())
    }
}
