//! Purchases service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, PoisonError, RwLock},
};

use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    auth::models::UserUuid,
    domain::{
        products::models::ProductUuid,
        purchases::{
            errors::PurchasesServiceError,
            models::{Purchase, PurchaseUuid},
            repository::PurchasesRepository,
            seed,
        },
    },
    notify::{Notifier, Severity},
    storage::Storage,
};

/// Purchase store backed by local key-value storage.
pub struct LocalPurchasesService {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    repository: PurchasesRepository,
    purchases: RwLock<Vec<Purchase>>,
}

impl Debug for LocalPurchasesService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocalPurchasesService").finish_non_exhaustive()
    }
}

impl LocalPurchasesService {
    /// Open the purchase store, loading persisted history or seeding the
    /// built-in sample history when none was ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error when persisted state cannot be read or parsed.
    pub fn open(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, PurchasesServiceError> {
        let repository = PurchasesRepository::new();

        let purchases = match repository.load(storage.as_ref())? {
            Some(purchases) => purchases,
            None => {
                let purchases = seed::initial_purchases();
                repository.save(storage.as_ref(), &purchases)?;
                purchases
            }
        };

        Ok(Self {
            storage,
            notifier,
            repository,
            purchases: RwLock::new(purchases),
        })
    }
}

#[automock]
pub trait PurchasesService: Send + Sync {
    /// Append an immutable purchase record with a fresh identifier and the
    /// current timestamp. The price is the caller-supplied amount, not
    /// re-derived from the catalog.
    fn record_purchase(
        &self,
        user: UserUuid,
        product: ProductUuid,
        price: Decimal,
    ) -> Result<Purchase, PurchasesServiceError>;

    /// Purchases made by the given user, in no particular order; callers
    /// sort by the purchase timestamp.
    fn list_by_user(&self, user: UserUuid) -> Vec<Purchase>;
}

impl PurchasesService for LocalPurchasesService {
    fn record_purchase(
        &self,
        user: UserUuid,
        product: ProductUuid,
        price: Decimal,
    ) -> Result<Purchase, PurchasesServiceError> {
        let purchase = Purchase {
            uuid: PurchaseUuid::new(),
            user_uuid: user,
            product_uuid: product,
            purchased_at: Timestamp::now(),
            price,
        };

        let mut purchases = self
            .purchases
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut next = purchases.clone();
        next.push(purchase.clone());

        self.repository.save(self.storage.as_ref(), &next)?;
        *purchases = next;

        self.notifier.notify(
            "Purchase complete",
            "Your purchase has been successfully completed.",
            Severity::Info,
        );

        Ok(purchase)
    }

    fn list_by_user(&self, user: UserUuid) -> Vec<Purchase> {
        let purchases = self
            .purchases
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        purchases
            .iter()
            .filter(|purchase| purchase.user_uuid == user)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, relaxed_notifier};

    use super::*;

    #[test]
    fn record_purchase_captures_the_paid_price() -> TestResult {
        let ctx = TestContext::new();
        let user = UserUuid::new();
        let product = ProductUuid::new();

        let purchase = ctx
            .purchases
            .record_purchase(user, product, Decimal::new(12345, 2))?;

        assert_eq!(purchase.user_uuid, user);
        assert_eq!(purchase.product_uuid, product);
        assert_eq!(purchase.price, Decimal::new(12345, 2));

        Ok(())
    }

    #[test]
    fn list_by_user_filters_other_histories() -> TestResult {
        let ctx = TestContext::new();
        let buyer = UserUuid::new();
        let other = UserUuid::new();

        ctx.purchases
            .record_purchase(buyer, ProductUuid::new(), Decimal::new(1000, 2))?;
        ctx.purchases
            .record_purchase(other, ProductUuid::new(), Decimal::new(2000, 2))?;
        ctx.purchases
            .record_purchase(buyer, ProductUuid::new(), Decimal::new(3000, 2))?;

        let history = ctx.purchases.list_by_user(buyer);

        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|purchase| purchase.user_uuid == buyer));

        Ok(())
    }

    #[test]
    fn empty_storage_seeds_the_sample_history() {
        let ctx = TestContext::seeded();

        let history = ctx.purchases.list_by_user(crate::auth::seed::DEMO_USER);

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn history_round_trips_through_storage() -> TestResult {
        let ctx = TestContext::new();
        let buyer = UserUuid::new();

        ctx.purchases
            .record_purchase(buyer, ProductUuid::new(), Decimal::new(9900, 2))?;

        let reopened = LocalPurchasesService::open(ctx.storage.clone(), relaxed_notifier())?;

        assert_eq!(reopened.list_by_user(buyer), ctx.purchases.list_by_user(buyer));

        Ok(())
    }
}
