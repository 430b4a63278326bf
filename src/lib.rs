//! Elidune Kiosk
//!
//! A console front desk for the Elidune library family: users log in or
//! create an account, then borrow or return one title from the catalog.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod session;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
