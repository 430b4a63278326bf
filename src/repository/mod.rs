//! Repository layer for persisted state

pub mod credentials;

pub use credentials::CredentialsFile;
