//! Built-in sample purchase history.

use jiff::{SignedDuration, Timestamp};
use rust_decimal::Decimal;
use uuid::uuid;

use crate::{
    auth::seed::DEMO_USER,
    domain::{
        products::seed::{RECORD_PLAYER, WOODEN_CHAIR},
        purchases::models::{Purchase, PurchaseUuid},
    },
    uuids::TypedUuid,
};

const FIRST_PURCHASE: PurchaseUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-0000000000f1"));
const SECOND_PURCHASE: PurchaseUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-0000000000f2"));

fn days_ago(days: i64) -> Timestamp {
    let now = Timestamp::now();
    now.checked_sub(SignedDuration::from_hours(days * 24))
        .unwrap_or(now)
}

pub(crate) fn initial_purchases() -> Vec<Purchase> {
    vec![
        Purchase {
            uuid: FIRST_PURCHASE,
            user_uuid: DEMO_USER,
            product_uuid: RECORD_PLAYER,
            purchased_at: days_ago(5),
            price: Decimal::new(12000, 2),
        },
        Purchase {
            uuid: SECOND_PURCHASE,
            user_uuid: DEMO_USER,
            product_uuid: WOODEN_CHAIR,
            purchased_at: days_ago(15),
            price: Decimal::new(7500, 2),
        },
    ]
}
