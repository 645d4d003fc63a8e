//! Catalog lookup indexes.

use rustc_hash::FxHashMap;

use crate::{
    auth::models::UserUuid,
    domain::products::models::{Product, ProductUuid},
};

/// Positional indexes over the published product list.
///
/// Rebuilt wholesale whenever the list is republished. Positions are stored
/// in insertion order, so ordered listings fall out of a straight index walk.
#[derive(Debug, Default)]
pub(crate) struct CatalogIndex {
    by_uuid: FxHashMap<ProductUuid, usize>,
    by_seller: FxHashMap<UserUuid, Vec<usize>>,
    by_category: FxHashMap<String, Vec<usize>>,
    featured: Vec<usize>,
}

impl CatalogIndex {
    pub(crate) fn build(products: &[Product]) -> Self {
        let mut index = Self::default();

        for (position, product) in products.iter().enumerate() {
            index.by_uuid.insert(product.uuid, position);
            index
                .by_seller
                .entry(product.seller_uuid)
                .or_default()
                .push(position);
            index
                .by_category
                .entry(product.category.clone())
                .or_default()
                .push(position);
            if product.featured {
                index.featured.push(position);
            }
        }

        index
    }

    pub(crate) fn position(&self, uuid: ProductUuid) -> Option<usize> {
        self.by_uuid.get(&uuid).copied()
    }

    pub(crate) fn seller_positions(&self, seller: UserUuid) -> &[usize] {
        self.by_seller.get(&seller).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn category_positions(&self, category: &str) -> &[usize] {
        self.by_category.get(category).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn featured_positions(&self) -> &[usize] {
        &self.featured
    }
}
