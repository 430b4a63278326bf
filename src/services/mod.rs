//! Business logic services

pub mod catalog;
pub mod users;

pub use catalog::Catalog;
pub use users::CredentialStore;
