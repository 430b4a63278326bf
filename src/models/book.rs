//! Book model and related types

use crate::error::{AppError, AppResult};

/// A title held by the library, with its borrow status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub borrowed: bool,
}

/// Short book representation for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookShort {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            borrowed: false,
        }
    }

    /// Mark the book as borrowed
    pub fn borrow(&mut self) -> AppResult<()> {
        if self.borrowed {
            return Err(AppError::AlreadyBorrowed(self.title.clone()));
        }
        self.borrowed = true;
        Ok(())
    }

    /// Mark the book as returned
    pub fn return_book(&mut self) -> AppResult<()> {
        if !self.borrowed {
            return Err(AppError::NotBorrowed(self.title.clone()));
        }
        self.borrowed = false;
        Ok(())
    }
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

impl std::fmt::Display for BookShort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
