//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{auth::models::UserUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub uuid: ProductUuid,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub price: Decimal,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<Specification>,
    pub condition: String,
    pub seller: SellerSnapshot,
    pub seller_uuid: UserUuid,
    pub created_at: Timestamp,
    #[serde(default)]
    pub featured: bool,
}

/// Free-form name/value specification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// Seller profile copied onto a product at listing time.
///
/// A value snapshot, deliberately never synced with any later account state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSnapshot {
    pub name: String,
    pub rating: Decimal,
    pub joined_at: Timestamp,
    pub location: String,
    pub total_sales: u32,
}
