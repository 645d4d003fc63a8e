//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    auth::{AuthService, AuthServiceError, LocalAuthService},
    config::AppConfig,
    domain::{
        carts::{CartService, CartServiceError, LocalCartService},
        checkout::{CheckoutError, CheckoutSummary, checkout},
        products::{LocalProductsService, ProductsService, ProductsServiceError},
        purchases::{LocalPurchasesService, PurchasesService, PurchasesServiceError},
    },
    notify::{Notifier, TracingNotifier},
    storage::{JsonFileStorage, Storage, StorageError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open storage")]
    Storage(#[from] StorageError),

    #[error("failed to open catalog store")]
    Products(#[from] ProductsServiceError),

    #[error("failed to open cart store")]
    Carts(#[from] CartServiceError),

    #[error("failed to open purchase store")]
    Purchases(#[from] PurchasesServiceError),

    #[error("failed to open auth service")]
    Auth(#[from] AuthServiceError),
}

/// The wired-up storefront: one instance of each store over shared
/// collaborators, constructed once at application start and passed by
/// reference to consumers.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartService>,
    pub purchases: Arc<dyn PurchasesService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from configuration, persisting to JSON
    /// files under the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be opened or persisted state
    /// cannot be read or parsed.
    pub fn open(config: &AppConfig) -> Result<Self, AppInitError> {
        let storage = Arc::new(JsonFileStorage::new(&config.data_dir)?);

        Self::with_collaborators(
            storage,
            Arc::new(TracingNotifier),
            config.simulated_auth_latency,
        )
    }

    /// Build application context over explicit storage and notification
    /// collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error when persisted state cannot be read or parsed.
    pub fn with_collaborators(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        simulated_auth_latency: Duration,
    ) -> Result<Self, AppInitError> {
        Ok(Self {
            products: Arc::new(LocalProductsService::open(
                storage.clone(),
                notifier.clone(),
            )?),
            carts: Arc::new(LocalCartService::open(storage.clone(), notifier.clone())?),
            purchases: Arc::new(LocalPurchasesService::open(
                storage.clone(),
                notifier.clone(),
            )?),
            auth: Arc::new(LocalAuthService::open(
                storage,
                notifier,
                simulated_auth_latency,
            )?),
        })
    }

    /// Check out the active account's cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotLoggedIn`] when no account is active, and
    /// propagates purchase/cart persistence failures. Purchases recorded
    /// before a failure are not rolled back.
    pub fn checkout(&self) -> Result<CheckoutSummary, CheckoutError> {
        let user = self
            .auth
            .current_user()
            .ok_or(CheckoutError::NotLoggedIn)?;

        checkout(
            user.uuid,
            self.products.as_ref(),
            self.carts.as_ref(),
            self.purchases.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::{storage::MemoryStorage, test::relaxed_notifier};

    use super::*;

    fn context() -> Result<AppContext, AppInitError> {
        AppContext::with_collaborators(
            Arc::new(MemoryStorage::new()),
            relaxed_notifier(),
            Duration::ZERO,
        )
    }

    #[test]
    fn open_seeds_every_store() -> TestResult {
        let ctx = context()?;

        assert_eq!(ctx.products.list_products().len(), 6);
        assert!(ctx.carts.lines().is_empty(), "the cart never seeds");
        assert_eq!(ctx.auth.current_user(), None);

        Ok(())
    }

    #[test]
    fn checkout_without_login_returns_not_logged_in() -> TestResult {
        let ctx = context()?;

        let result = ctx.checkout();

        assert!(
            matches!(result, Err(CheckoutError::NotLoggedIn)),
            "expected NotLoggedIn, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn checkout_uses_the_active_account() -> TestResult {
        let ctx = context()?;

        let account = ctx.auth.login("john@example.com", "password123")?;

        let products = ctx.products.list_products();
        let product = products.first().expect("seeded catalog cannot be empty");
        ctx.carts.add_to_cart(product.uuid)?;

        let summary = ctx.checkout()?;

        assert_eq!(summary.recorded.len(), 1);
        assert!(
            summary
                .recorded
                .iter()
                .all(|purchase| purchase.user_uuid == account.uuid),
            "purchases must belong to the active account"
        );

        Ok(())
    }
}
