//! Checkout orchestration.
//!
//! The stores themselves know nothing about checkout; this is the
//! caller-side protocol of recording one purchase per resolvable cart line
//! and then clearing the cart. There is no atomicity across the purchase
//! inserts: records written before a failure stay written.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    auth::models::UserUuid,
    domain::{
        carts::{CartServiceError, service::CartService},
        products::service::ProductsService,
        purchases::{PurchasesServiceError, models::Purchase, service::PurchasesService},
    },
};

/// Outcome of a checkout run.
#[derive(Debug, Clone)]
pub struct CheckoutSummary {
    /// Purchases recorded, one per resolvable cart line.
    pub recorded: Vec<Purchase>,

    /// Lines skipped because their product no longer resolves.
    pub skipped_lines: usize,

    /// Total amount across the recorded purchases.
    pub total_paid: Decimal,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("no active account")]
    NotLoggedIn,

    #[error(transparent)]
    Purchases(#[from] PurchasesServiceError),

    #[error(transparent)]
    Cart(#[from] CartServiceError),
}

/// Record one purchase per resolvable cart line at `line price × quantity`,
/// then clear the cart.
///
/// # Errors
///
/// Returns an error when recording a purchase or clearing the cart fails;
/// purchases recorded before the failure are not rolled back.
pub fn checkout(
    user: UserUuid,
    products: &dyn ProductsService,
    carts: &dyn CartService,
    purchases: &dyn PurchasesService,
) -> Result<CheckoutSummary, CheckoutError> {
    let mut recorded = Vec::new();
    let mut skipped_lines = 0;
    let mut total_paid = Decimal::ZERO;

    for line in carts.lines() {
        let Some(product) = products.get_product(line.product_uuid) else {
            skipped_lines += 1;
            continue;
        };

        let price = product.price * Decimal::from(line.quantity);
        let purchase = purchases.record_purchase(user, product.uuid, price)?;

        total_paid += price;
        recorded.push(purchase);
    }

    carts.clear_cart()?;

    Ok(CheckoutSummary {
        recorded,
        skipped_lines,
        total_paid,
    })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        auth::models::UserUuid,
        domain::products::{
            data::NewProduct,
            models::{Product, SellerSnapshot},
        },
        test::TestContext,
    };

    use super::*;

    fn listed(ctx: &TestContext, title: &str, price: Decimal) -> Product {
        ctx.products
            .create_product(NewProduct {
                title: title.to_string(),
                description: "A test listing".to_string(),
                category: "Electronics".to_string(),
                sub_category: None,
                price,
                image: "/images/test.jpg".to_string(),
                specifications: Vec::new(),
                condition: "Used - Good".to_string(),
                seller: SellerSnapshot {
                    name: "testseller".to_string(),
                    rating: Decimal::new(45, 1),
                    joined_at: Timestamp::UNIX_EPOCH,
                    location: "Testville".to_string(),
                    total_sales: 3,
                },
                seller_uuid: UserUuid::new(),
                featured: false,
            })
            .expect("creating a test listing should succeed")
    }

    #[test]
    fn checkout_records_one_purchase_per_line_and_clears_the_cart() -> TestResult {
        let ctx = TestContext::new();
        let buyer = UserUuid::new();

        let first = listed(&ctx, "First", Decimal::new(5000, 2));
        let second = listed(&ctx, "Second", Decimal::new(3000, 2));

        ctx.carts.add_to_cart(first.uuid)?;
        ctx.carts.set_quantity(first.uuid, 2)?;
        ctx.carts.add_to_cart(second.uuid)?;

        let summary = checkout(buyer, &ctx.products, &ctx.carts, &ctx.purchases)?;

        assert_eq!(summary.recorded.len(), 2);
        assert_eq!(summary.skipped_lines, 0);
        assert_eq!(summary.total_paid, Decimal::new(13000, 2));

        let mut prices: Vec<Decimal> = summary
            .recorded
            .iter()
            .map(|purchase| purchase.price)
            .collect();
        prices.sort();
        assert_eq!(prices, vec![Decimal::new(3000, 2), Decimal::new(10000, 2)]);

        assert!(ctx.carts.lines().is_empty(), "checkout must clear the cart");
        assert_eq!(ctx.purchases.list_by_user(buyer).len(), 2);

        Ok(())
    }

    #[test]
    fn dangling_lines_are_skipped_not_fatal() -> TestResult {
        let ctx = TestContext::new();
        let buyer = UserUuid::new();

        let kept = listed(&ctx, "Kept", Decimal::new(4000, 2));
        let gone = listed(&ctx, "Gone", Decimal::new(9000, 2));

        ctx.carts.add_to_cart(kept.uuid)?;
        ctx.carts.add_to_cart(gone.uuid)?;
        ctx.products.delete_product(gone.uuid)?;

        let summary = checkout(buyer, &ctx.products, &ctx.carts, &ctx.purchases)?;

        assert_eq!(summary.recorded.len(), 1);
        assert_eq!(summary.skipped_lines, 1);
        assert_eq!(summary.total_paid, Decimal::new(4000, 2));
        assert!(ctx.carts.lines().is_empty());

        Ok(())
    }

    #[test]
    fn checkout_of_an_empty_cart_records_nothing() -> TestResult {
        let ctx = TestContext::new();

        let summary = checkout(UserUuid::new(), &ctx.products, &ctx.carts, &ctx.purchases)?;

        assert!(summary.recorded.is_empty());
        assert_eq!(summary.total_paid, Decimal::ZERO);

        Ok(())
    }
}
