//! Catalog persistence.

use crate::{
    domain::products::{errors::ProductsServiceError, models::Product},
    storage::Storage,
};

pub(crate) const PRODUCTS_KEY: &str = "products";

#[derive(Debug, Clone, Default)]
pub(crate) struct ProductsRepository;

impl ProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Load the persisted catalog; `None` means nothing was ever stored.
    pub(crate) fn load(
        &self,
        storage: &dyn Storage,
    ) -> Result<Option<Vec<Product>>, ProductsServiceError> {
        let Some(raw) = storage.get(PRODUCTS_KEY)? else {
            return Ok(None);
        };

        let products: Vec<Product> = serde_json::from_str(&raw)?;
        tracing::debug!(count = products.len(), "loaded catalog");

        Ok(Some(products))
    }

    pub(crate) fn save(
        &self,
        storage: &dyn Storage,
        products: &[Product],
    ) -> Result<(), ProductsServiceError> {
        let raw = serde_json::to_string(products)?;
        storage.set(PRODUCTS_KEY, &raw)?;

        Ok(())
    }
}
