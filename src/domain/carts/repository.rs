//! Cart persistence.

use crate::{
    domain::carts::{errors::CartServiceError, models::CartLine},
    storage::Storage,
};

pub(crate) const CART_KEY: &str = "cart";

#[derive(Debug, Clone, Default)]
pub(crate) struct CartRepository;

impl CartRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load the persisted cart; an absent value is an empty cart.
    pub(crate) fn load(&self, storage: &dyn Storage) -> Result<Vec<CartLine>, CartServiceError> {
        let Some(raw) = storage.get(CART_KEY)? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw)?)
    }

    pub(crate) fn save(
        &self,
        storage: &dyn Storage,
        lines: &[CartLine],
    ) -> Result<(), CartServiceError> {
        let raw = serde_json::to_string(lines)?;
        storage.set(CART_KEY, &raw)?;

        Ok(())
    }
}
