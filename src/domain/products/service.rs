//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, PoisonError, RwLock},
};

use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    auth::models::UserUuid,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        index::CatalogIndex,
        models::{Product, ProductUuid},
        repository::ProductsRepository,
        seed,
    },
    notify::{Notifier, Severity},
    storage::Storage,
};

/// Catalog store backed by local key-value storage.
///
/// All lookups go through auxiliary indexes rebuilt on every publish, never a
/// per-call scan of the record list.
pub struct LocalProductsService {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    repository: ProductsRepository,
    state: RwLock<CatalogState>,
}

struct CatalogState {
    products: Vec<Product>,
    index: CatalogIndex,
}

impl Debug for LocalProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocalProductsService").finish_non_exhaustive()
    }
}

impl LocalProductsService {
    /// Open the catalog store, loading persisted listings or seeding the
    /// built-in sample catalog when none were ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error when persisted state cannot be read or parsed.
    pub fn open(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ProductsServiceError> {
        let repository = ProductsRepository::new();

        let products = match repository.load(storage.as_ref())? {
            Some(products) => products,
            None => {
                let products = seed::initial_products();
                repository.save(storage.as_ref(), &products)?;
                products
            }
        };

        let index = CatalogIndex::build(&products);

        Ok(Self {
            storage,
            notifier,
            repository,
            state: RwLock::new(CatalogState { products, index }),
        })
    }

    /// Persist a fully rebuilt product list, then publish it together with
    /// fresh indexes. A failed persist leaves the published state untouched.
    fn publish(
        &self,
        state: &mut CatalogState,
        next: Vec<Product>,
    ) -> Result<(), ProductsServiceError> {
        self.repository.save(self.storage.as_ref(), &next)?;
        state.index = CatalogIndex::build(&next);
        state.products = next;

        Ok(())
    }
}

#[automock]
pub trait ProductsService: Send + Sync {
    /// All listings in insertion order.
    fn list_products(&self) -> Vec<Product>;

    /// Retrieve a single listing.
    fn get_product(&self, uuid: ProductUuid) -> Option<Product>;

    /// Listings owned by the given seller, insertion order.
    fn list_by_seller(&self, seller: UserUuid) -> Vec<Product>;

    /// Listings in the given category, insertion order.
    fn list_by_category(&self, category: &str) -> Vec<Product>;

    /// Listings flagged as featured.
    fn list_featured(&self) -> Vec<Product>;

    /// Create a listing with a fresh identifier and creation timestamp.
    fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Merge partial fields into an existing listing, preserving its
    /// identifier, owning seller, seller snapshot, and creation timestamp.
    ///
    /// An unknown identifier is reported through the notification channel
    /// and leaves the catalog untouched; it is not an `Err`.
    fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<(), ProductsServiceError>;

    /// Remove a listing. Removing an absent identifier is a no-op.
    ///
    /// Cart lines and purchase records referencing the listing are left in
    /// place; readers resolve them as missing.
    fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError>;
}

impl ProductsService for LocalProductsService {
    fn list_products(&self) -> Vec<Product> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        state.products.clone()
    }

    fn get_product(&self, uuid: ProductUuid) -> Option<Product> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        state
            .index
            .position(uuid)
            .and_then(|position| state.products.get(position).cloned())
    }

    fn list_by_seller(&self, seller: UserUuid) -> Vec<Product> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        state
            .index
            .seller_positions(seller)
            .iter()
            .filter_map(|&position| state.products.get(position))
            .cloned()
            .collect()
    }

    fn list_by_category(&self, category: &str) -> Vec<Product> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        state
            .index
            .category_positions(category)
            .iter()
            .filter_map(|&position| state.products.get(position))
            .cloned()
            .collect()
    }

    fn list_featured(&self) -> Vec<Product> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        state
            .index
            .featured_positions()
            .iter()
            .filter_map(|&position| state.products.get(position))
            .cloned()
            .collect()
    }

    fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if product.price < Decimal::ZERO {
            self.notifier
                .notify("Error", "Price cannot be negative", Severity::Error);
            return Err(ProductsServiceError::InvalidPrice);
        }

        let product = product.into_product(ProductUuid::new(), Timestamp::now());

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let mut next = state.products.clone();
        next.push(product.clone());
        self.publish(&mut state, next)?;

        self.notifier.notify(
            "Product added",
            "Your product has been successfully listed.",
            Severity::Info,
        );

        Ok(product)
    }

    fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<(), ProductsServiceError> {
        if update.price.is_some_and(|price| price < Decimal::ZERO) {
            self.notifier
                .notify("Error", "Price cannot be negative", Severity::Error);
            return Err(ProductsServiceError::InvalidPrice);
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let Some(position) = state.index.position(uuid) else {
            self.notifier
                .notify("Error", "Product not found", Severity::Error);
            return Ok(());
        };

        let mut next = state.products.clone();
        if let Some(product) = next.get_mut(position) {
            update.apply_to(product);
        }
        self.publish(&mut state, next)?;

        self.notifier.notify(
            "Product updated",
            "Your product has been successfully updated.",
            Severity::Info,
        );

        Ok(())
    }

    fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let next: Vec<Product> = state
            .products
            .iter()
            .filter(|product| product.uuid != uuid)
            .cloned()
            .collect();
        self.publish(&mut state, next)?;

        self.notifier.notify(
            "Product deleted",
            "Your product has been successfully removed.",
            Severity::Info,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::{
        domain::products::models::SellerSnapshot,
        notify::MockNotifier,
        storage::{MemoryStorage, Storage},
        test::{TestContext, relaxed_notifier},
    };

    use super::*;

    fn snapshot() -> SellerSnapshot {
        SellerSnapshot {
            name: "testseller".to_string(),
            rating: Decimal::new(45, 1),
            joined_at: Timestamp::UNIX_EPOCH,
            location: "Testville".to_string(),
            total_sales: 3,
        }
    }

    fn new_product(title: &str, price: Decimal) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: "A test listing".to_string(),
            category: "Electronics".to_string(),
            sub_category: None,
            price,
            image: "/images/test.jpg".to_string(),
            specifications: Vec::new(),
            condition: "Used - Good".to_string(),
            seller: snapshot(),
            seller_uuid: UserUuid::new(),
            featured: false,
        }
    }

    #[test]
    fn create_product_assigns_identifier_and_timestamp() -> TestResult {
        let ctx = TestContext::new();

        let created = ctx
            .products
            .create_product(new_product("Camera", Decimal::new(9900, 2)))?;

        assert_eq!(created.title, "Camera");
        assert_eq!(created.price, Decimal::new(9900, 2));
        assert_eq!(ctx.products.get_product(created.uuid), Some(created));

        Ok(())
    }

    #[test]
    fn create_product_rejects_negative_price() {
        let ctx = TestContext::new();

        let result = ctx
            .products
            .create_product(new_product("Bad", Decimal::new(-1, 2)));

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice)),
            "expected InvalidPrice, got {result:?}"
        );
        assert!(ctx.products.list_products().is_empty());
    }

    #[test]
    fn update_product_merges_partial_fields() -> TestResult {
        let ctx = TestContext::new();

        let created = ctx
            .products
            .create_product(new_product("Lamp", Decimal::new(2000, 2)))?;

        ctx.products.update_product(
            created.uuid,
            ProductUpdate {
                price: Some(Decimal::new(1500, 2)),
                condition: Some("Used - Fair".to_string()),
                ..ProductUpdate::default()
            },
        )?;

        let updated = ctx
            .products
            .get_product(created.uuid)
            .expect("updated product should still resolve");

        assert_eq!(updated.price, Decimal::new(1500, 2));
        assert_eq!(updated.condition, "Used - Fair");
        assert_eq!(updated.title, "Lamp");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.seller_uuid, created.seller_uuid);

        Ok(())
    }

    #[test]
    fn update_product_unknown_uuid_reports_not_found() -> TestResult {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(crate::domain::products::repository::PRODUCTS_KEY, "[]")?;

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, message, severity| {
                title == "Error" && message == "Product not found" && *severity == Severity::Error
            })
            .times(1)
            .returning(|_, _, _| {});

        let products = LocalProductsService::open(storage, Arc::new(notifier))?;

        products.update_product(ProductUuid::new(), ProductUpdate::default())?;

        assert!(
            products.list_products().is_empty(),
            "a missed update must not alter the catalog"
        );

        Ok(())
    }

    #[test]
    fn delete_product_is_idempotent() -> TestResult {
        let ctx = TestContext::new();

        let created = ctx
            .products
            .create_product(new_product("Chair", Decimal::new(4000, 2)))?;

        ctx.products.delete_product(created.uuid)?;
        assert_eq!(ctx.products.get_product(created.uuid), None);

        ctx.products.delete_product(created.uuid)?;
        assert!(ctx.products.list_products().is_empty());

        Ok(())
    }

    #[test]
    fn list_by_seller_preserves_insertion_order() -> TestResult {
        let ctx = TestContext::new();
        let seller = UserUuid::new();

        let mut first = new_product("First", Decimal::new(1000, 2));
        first.seller_uuid = seller;
        let mut second = new_product("Second", Decimal::new(2000, 2));
        second.seller_uuid = seller;

        ctx.products.create_product(first)?;
        ctx.products
            .create_product(new_product("Other", Decimal::new(500, 2)))?;
        ctx.products.create_product(second)?;

        let titles: Vec<String> = ctx
            .products
            .list_by_seller(seller)
            .into_iter()
            .map(|product| product.title)
            .collect();

        assert_eq!(titles, vec!["First", "Second"]);

        Ok(())
    }

    #[test]
    fn list_by_category_filters_listings() -> TestResult {
        let ctx = TestContext::new();

        let mut clothing = new_product("Scarf", Decimal::new(1200, 2));
        clothing.category = "Clothing".to_string();

        ctx.products.create_product(clothing)?;
        ctx.products
            .create_product(new_product("Headphones", Decimal::new(8000, 2)))?;

        let clothing = ctx.products.list_by_category("Clothing");
        assert_eq!(clothing.len(), 1);
        assert_eq!(
            clothing.first().map(|product| product.title.as_str()),
            Some("Scarf")
        );
        assert!(ctx.products.list_by_category("Gaming").is_empty());

        Ok(())
    }

    #[test]
    fn list_featured_returns_flagged_listings_only() -> TestResult {
        let ctx = TestContext::new();

        let mut featured = new_product("Poster", Decimal::new(900, 2));
        featured.featured = true;

        ctx.products.create_product(featured)?;
        ctx.products
            .create_product(new_product("Mug", Decimal::new(600, 2)))?;

        let listed = ctx.products.list_featured();
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|product| product.featured));

        Ok(())
    }

    #[test]
    fn empty_storage_seeds_the_sample_catalog() {
        let ctx = TestContext::seeded();

        let products = ctx.products.list_products();

        assert_eq!(products.len(), 6);
        assert!(!ctx.products.list_featured().is_empty());
    }

    #[test]
    fn catalog_round_trips_through_storage() -> TestResult {
        let ctx = TestContext::new();

        ctx.products
            .create_product(new_product("Tent", Decimal::new(15000, 2)))?;
        ctx.products
            .create_product(new_product("Stove", Decimal::new(4500, 2)))?;

        let reopened = LocalProductsService::open(ctx.storage.clone(), relaxed_notifier())?;

        assert_eq!(reopened.list_products(), ctx.products.list_products());

        Ok(())
    }
}
