//! Accounts and the active session.

pub mod errors;
pub mod models;
pub(crate) mod repository;
pub(crate) mod seed;
pub mod service;

pub use errors::AuthServiceError;
pub use service::*;
