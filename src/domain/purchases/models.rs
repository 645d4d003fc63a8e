//! Purchase Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{auth::models::UserUuid, domain::products::models::ProductUuid, uuids::TypedUuid};

/// Purchase UUID
pub type PurchaseUuid = TypedUuid<Purchase>;

/// Completed purchase record. Immutable once created.
///
/// The price is the amount paid at purchase time, deliberately decoupled
/// from the product's current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub uuid: PurchaseUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub purchased_at: Timestamp,
    pub price: Decimal,
}
