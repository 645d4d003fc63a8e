//! Cart Models

use serde::{Deserialize, Serialize};

use crate::domain::products::models::ProductUuid;

/// One (product, quantity) pairing within the cart.
///
/// Quantity is always at least 1; a line that would drop to 0 is removed
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}
