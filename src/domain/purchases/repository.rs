//! Purchase history persistence.

use crate::{
    domain::purchases::{errors::PurchasesServiceError, models::Purchase},
    storage::Storage,
};

pub(crate) const PURCHASES_KEY: &str = "purchases";

#[derive(Debug, Clone, Default)]
pub(crate) struct PurchasesRepository;

impl PurchasesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load the persisted history; `None` means nothing was ever stored.
    pub(crate) fn load(
        &self,
        storage: &dyn Storage,
    ) -> Result<Option<Vec<Purchase>>, PurchasesServiceError> {
        let Some(raw) = storage.get(PURCHASES_KEY)? else {
            return Ok(None);
        };

        let purchases: Vec<Purchase> = serde_json::from_str(&raw)?;
        tracing::debug!(count = purchases.len(), "loaded purchase history");

        Ok(Some(purchases))
    }

    pub(crate) fn save(
        &self,
        storage: &dyn Storage,
        purchases: &[Purchase],
    ) -> Result<(), PurchasesServiceError> {
        let raw = serde_json::to_string(purchases)?;
        storage.set(PURCHASES_KEY, &raw)?;

        Ok(())
    }
}
