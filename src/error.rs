//! Error types for the Elidune kiosk

use thiserror::Error;

/// Application error codes, shared with the Elidune server numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    NotBorrowed = 12,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid choice: {0}")]
    InvalidMenuChoice(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Username already exists: {0}")]
    DuplicateUser(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Book is already borrowed: {0}")]
    AlreadyBorrowed(String),

    #[error("Book is not currently borrowed: {0}")]
    NotBorrowed(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Numeric code reported alongside the error in logs
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidMenuChoice(_) | AppError::InvalidAction(_) => ErrorCode::BadValue,
            AppError::Authentication(_) => ErrorCode::NotAuthorized,
            AppError::DuplicateUser(_) => ErrorCode::Duplicate,
            AppError::BookNotFound(_) => ErrorCode::NoSuchItem,
            AppError::AlreadyBorrowed(_) => ErrorCode::ItemNotAvailable,
            AppError::NotBorrowed(_) => ErrorCode::NotBorrowed,
            AppError::Io(_) | AppError::Config(_) => ErrorCode::Failure,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
