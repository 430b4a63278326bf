//! Data models for the Elidune kiosk

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookShort};
pub use loan::LoanAction;
pub use user::User;
