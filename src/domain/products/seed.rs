//! Built-in sample catalog.

use jiff::{SignedDuration, Timestamp};
use rust_decimal::Decimal;
use uuid::uuid;

use crate::{
    auth::{models::UserUuid, seed::DEMO_USER},
    domain::products::models::{Product, ProductUuid, SellerSnapshot, Specification},
    uuids::TypedUuid,
};

pub(crate) const LEATHER_JACKET: ProductUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-000000000001"));
pub(crate) const MECHANICAL_KEYBOARD: ProductUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-000000000002"));
pub(crate) const RECORD_PLAYER: ProductUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-000000000003"));
pub(crate) const MOUNTAIN_BIKE: ProductUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-000000000004"));
pub(crate) const WOODEN_CHAIR: ProductUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-000000000005"));
pub(crate) const CERAMIC_VASE: ProductUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-000000000006"));

pub(crate) const SELLER_JANE: UserUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-0000000000a2"));
pub(crate) const SELLER_BOB: UserUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-0000000000a3"));

fn days_ago(days: i64) -> Timestamp {
    let now = Timestamp::now();
    now.checked_sub(SignedDuration::from_hours(days * 24))
        .unwrap_or(now)
}

fn john(sales_so_far: u32) -> SellerSnapshot {
    SellerSnapshot {
        name: "johndoe".to_string(),
        rating: Decimal::new(48, 1),
        joined_at: days_ago(400),
        location: "Portland, OR".to_string(),
        total_sales: sales_so_far,
    }
}

fn jane() -> SellerSnapshot {
    SellerSnapshot {
        name: "janedoe".to_string(),
        rating: Decimal::new(46, 1),
        joined_at: days_ago(720),
        location: "Austin, TX".to_string(),
        total_sales: 51,
    }
}

fn bob() -> SellerSnapshot {
    SellerSnapshot {
        name: "bobsmith".to_string(),
        rating: Decimal::new(49, 1),
        joined_at: days_ago(150),
        location: "Burlington, VT".to_string(),
        total_sales: 12,
    }
}

fn spec(name: &str, value: &str) -> Specification {
    Specification {
        name: name.to_string(),
        value: value.to_string(),
    }
}

pub(crate) fn initial_products() -> Vec<Product> {
    vec![
        Product {
            uuid: LEATHER_JACKET,
            title: "Vintage Leather Jacket".to_string(),
            description: "Genuine leather jacket in excellent condition. Worn only a few times."
                .to_string(),
            category: "Clothing".to_string(),
            sub_category: Some("Men".to_string()),
            price: Decimal::new(8999, 2),
            image: "/images/leather-jacket.jpg".to_string(),
            specifications: vec![spec("Size", "L"), spec("Material", "Leather")],
            condition: "Used - Excellent".to_string(),
            seller: john(24),
            seller_uuid: DEMO_USER,
            created_at: days_ago(7),
            featured: true,
        },
        Product {
            uuid: MECHANICAL_KEYBOARD,
            title: "Mechanical Keyboard".to_string(),
            description:
                "Mechanical keyboard with Cherry MX Brown switches. Great for typing and gaming."
                    .to_string(),
            category: "Electronics".to_string(),
            sub_category: Some("Computers".to_string()),
            price: Decimal::new(4550, 2),
            image: "/images/mechanical-keyboard.jpg".to_string(),
            specifications: vec![spec("Switches", "Cherry MX Brown"), spec("Layout", "ANSI")],
            condition: "Used - Good".to_string(),
            seller: john(25),
            seller_uuid: DEMO_USER,
            created_at: days_ago(14),
            featured: false,
        },
        Product {
            uuid: RECORD_PLAYER,
            title: "Vintage Record Player".to_string(),
            description: "Fully functional record player from the 70s. Great sound quality."
                .to_string(),
            category: "Electronics".to_string(),
            sub_category: Some("Audio".to_string()),
            price: Decimal::new(12000, 2),
            image: "/images/record-player.jpg".to_string(),
            specifications: vec![spec("Speeds", "33/45 rpm")],
            condition: "Used - Good".to_string(),
            seller: jane(),
            seller_uuid: SELLER_JANE,
            created_at: days_ago(21),
            featured: true,
        },
        Product {
            uuid: MOUNTAIN_BIKE,
            title: "Mountain Bike".to_string(),
            description: "Lightly used mountain bike. 21 speeds, disc brakes.".to_string(),
            category: "Sports".to_string(),
            sub_category: Some("Cycling".to_string()),
            price: Decimal::new(21000, 2),
            image: "/images/mountain-bike.jpg".to_string(),
            specifications: vec![spec("Speeds", "21"), spec("Brakes", "Disc")],
            condition: "Used - Good".to_string(),
            seller: jane(),
            seller_uuid: SELLER_JANE,
            created_at: days_ago(30),
            featured: true,
        },
        Product {
            uuid: WOODEN_CHAIR,
            title: "Antique Wooden Chair".to_string(),
            description:
                "Beautiful wooden chair from the early 1900s. Some wear but in good condition."
                    .to_string(),
            category: "Home & Garden".to_string(),
            sub_category: Some("Furniture".to_string()),
            price: Decimal::new(7500, 2),
            image: "/images/wooden-chair.jpg".to_string(),
            specifications: vec![spec("Era", "Early 1900s")],
            condition: "Used - Fair".to_string(),
            seller: bob(),
            seller_uuid: SELLER_BOB,
            created_at: days_ago(45),
            featured: false,
        },
        Product {
            uuid: CERAMIC_VASE,
            title: "Handmade Ceramic Vase".to_string(),
            description: "Unique handmade ceramic vase. Perfect for fresh or dried flowers."
                .to_string(),
            category: "Home & Garden".to_string(),
            sub_category: Some("Home Decor".to_string()),
            price: Decimal::new(3500, 2),
            image: "/images/ceramic-vase.jpg".to_string(),
            specifications: vec![spec("Height", "28 cm")],
            condition: "Used - Excellent".to_string(),
            seller: bob(),
            seller_uuid: SELLER_BOB,
            created_at: days_ago(60),
            featured: true,
        },
    ]
}
