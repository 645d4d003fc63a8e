//! Products Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    auth::models::UserUuid,
    domain::products::models::{Product, ProductUuid, SellerSnapshot, Specification},
};

/// New Product Data
///
/// Everything a listing carries except the identifier and creation
/// timestamp, which the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub price: Decimal,
    pub image: String,
    pub specifications: Vec<Specification>,
    pub condition: String,
    pub seller: SellerSnapshot,
    pub seller_uuid: UserUuid,
    pub featured: bool,
}

impl NewProduct {
    pub(crate) fn into_product(self, uuid: ProductUuid, created_at: Timestamp) -> Product {
        Product {
            uuid,
            title: self.title,
            description: self.description,
            category: self.category,
            sub_category: self.sub_category,
            price: self.price,
            image: self.image,
            specifications: self.specifications,
            condition: self.condition,
            seller: self.seller,
            seller_uuid: self.seller_uuid,
            created_at,
            featured: self.featured,
        }
    }
}

/// Product Update Data
///
/// Unset fields keep their current values. The identifier, owning seller,
/// seller snapshot, and creation timestamp are not updatable at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub specifications: Option<Vec<Specification>>,
    pub condition: Option<String>,
    pub featured: Option<bool>,
}

impl ProductUpdate {
    pub(crate) fn apply_to(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(sub_category) = self.sub_category {
            product.sub_category = Some(sub_category);
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(specifications) = self.specifications {
            product.specifications = specifications;
        }
        if let Some(condition) = self.condition {
            product.condition = condition;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }
}
