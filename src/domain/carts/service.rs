//! Carts service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, PoisonError, RwLock},
};

use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::{errors::CartServiceError, models::CartLine, repository::CartRepository},
        products::{models::ProductUuid, service::ProductsService},
    },
    notify::{Notifier, Severity},
    storage::Storage,
};

/// Cart store backed by local key-value storage.
///
/// The cart never seeds sample data; absent storage means an empty cart.
pub struct LocalCartService {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    repository: CartRepository,
    lines: RwLock<Vec<CartLine>>,
}

impl Debug for LocalCartService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocalCartService").finish_non_exhaustive()
    }
}

impl LocalCartService {
    /// Open the cart store over persisted storage.
    ///
    /// # Errors
    ///
    /// Returns an error when persisted state cannot be read or parsed.
    pub fn open(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CartServiceError> {
        let repository = CartRepository::new();
        let lines = repository.load(storage.as_ref())?;

        Ok(Self {
            storage,
            notifier,
            repository,
            lines: RwLock::new(lines),
        })
    }

    /// Persist a fully rebuilt line list, then publish it. A failed persist
    /// leaves the published state untouched.
    fn publish(
        &self,
        lines: &mut Vec<CartLine>,
        next: Vec<CartLine>,
    ) -> Result<(), CartServiceError> {
        self.repository.save(self.storage.as_ref(), &next)?;
        *lines = next;

        Ok(())
    }
}

#[automock]
pub trait CartService: Send + Sync {
    /// Snapshot of the cart lines, for display joins and checkout.
    fn lines(&self) -> Vec<CartLine>;

    /// Increment the line for `product`, or insert one with quantity 1.
    fn add_to_cart(&self, product: ProductUuid) -> Result<(), CartServiceError>;

    /// Delete the line for `product`, if present.
    fn remove_from_cart(&self, product: ProductUuid) -> Result<(), CartServiceError>;

    /// Overwrite the line's quantity; 0 is equivalent to removal.
    fn set_quantity(&self, product: ProductUuid, quantity: u32) -> Result<(), CartServiceError>;

    /// Empty the cart.
    fn clear_cart(&self) -> Result<(), CartServiceError>;

    /// Sum of `quantity × current price` over all lines. Lines whose product
    /// no longer resolves contribute zero.
    fn cart_total(&self, catalog: &dyn ProductsService) -> Decimal;

    /// Sum of quantities across all lines.
    fn item_count(&self) -> u64;
}

impl CartService for LocalCartService {
    fn lines(&self) -> Vec<CartLine> {
        let lines = self.lines.read().unwrap_or_else(PoisonError::into_inner);

        lines.clone()
    }

    fn add_to_cart(&self, product: ProductUuid) -> Result<(), CartServiceError> {
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);

        let mut next = lines.clone();
        match next.iter_mut().find(|line| line.product_uuid == product) {
            Some(line) => line.quantity += 1,
            None => next.push(CartLine {
                product_uuid: product,
                quantity: 1,
            }),
        }
        self.publish(&mut lines, next)?;

        self.notifier.notify(
            "Added to cart",
            "Item has been added to your cart.",
            Severity::Info,
        );

        Ok(())
    }

    fn remove_from_cart(&self, product: ProductUuid) -> Result<(), CartServiceError> {
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);

        let next: Vec<CartLine> = lines
            .iter()
            .filter(|line| line.product_uuid != product)
            .copied()
            .collect();
        self.publish(&mut lines, next)?;

        self.notifier.notify(
            "Removed from cart",
            "Item has been removed from your cart.",
            Severity::Info,
        );

        Ok(())
    }

    fn set_quantity(&self, product: ProductUuid, quantity: u32) -> Result<(), CartServiceError> {
        if quantity == 0 {
            return self.remove_from_cart(product);
        }

        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);

        let mut next = lines.clone();
        for line in &mut next {
            if line.product_uuid == product {
                line.quantity = quantity;
            }
        }
        self.publish(&mut lines, next)?;

        Ok(())
    }

    fn clear_cart(&self) -> Result<(), CartServiceError> {
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);

        self.publish(&mut lines, Vec::new())?;

        self.notifier.notify(
            "Cart cleared",
            "All items have been removed from your cart.",
            Severity::Info,
        );

        Ok(())
    }

    fn cart_total(&self, catalog: &dyn ProductsService) -> Decimal {
        let lines = self.lines.read().unwrap_or_else(PoisonError::into_inner);

        lines
            .iter()
            .filter_map(|line| {
                catalog
                    .get_product(line.product_uuid)
                    .map(|product| product.price * Decimal::from(line.quantity))
            })
            .sum()
    }

    fn item_count(&self) -> u64 {
        let lines = self.lines.read().unwrap_or_else(PoisonError::into_inner);

        lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
