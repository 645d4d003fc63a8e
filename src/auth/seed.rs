//! Built-in demo account.

use uuid::uuid;

use crate::{
    auth::{
        models::{AccountRecord, UserUuid},
        service::password_digest,
    },
    uuids::TypedUuid,
};

/// Identifier of the demo account, also the seller of part of the sample
/// catalog and the owner of the sample purchase history.
pub(crate) const DEMO_USER: UserUuid =
    TypedUuid::from_uuid(uuid!("0190a1b2-0000-7000-8000-0000000000a1"));

pub(crate) fn initial_accounts() -> Vec<AccountRecord> {
    vec![AccountRecord {
        uuid: DEMO_USER,
        username: "johndoe".to_string(),
        email: "john@example.com".to_string(),
        password_digest: password_digest("password123"),
    }]
}
