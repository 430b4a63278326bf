//! Catalog management service

use indexmap::IndexMap;

use crate::{
    config::SeedBook,
    error::{AppError, AppResult},
    models::book::{Book, BookShort},
};

/// In-memory catalog keyed by exact title, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: IndexMap<String, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a seed list
    pub fn seeded(seed: &[SeedBook]) -> Self {
        let mut catalog = Self::new();
        for book in seed {
            catalog.add_book(&book.title, &book.author);
        }
        tracing::debug!("Catalog seeded with {} books", catalog.len());
        catalog
    }

    /// Add a book, replacing any entry with the same title
    pub fn add_book(&mut self, title: &str, author: &str) {
        if self
            .books
            .insert(title.to_string(), Book::new(title, author))
            .is_some()
        {
            tracing::debug!("Catalog entry replaced: {}", title);
        }
    }

    /// Get a book by exact, case-sensitive title
    pub fn get_book(&self, title: &str) -> AppResult<&Book> {
        self.books
            .get(title)
            .ok_or_else(|| AppError::BookNotFound(title.to_string()))
    }

    pub fn get_book_mut(&mut self, title: &str) -> AppResult<&mut Book> {
        self.books
            .get_mut(title)
            .ok_or_else(|| AppError::BookNotFound(title.to_string()))
    }

    /// List books for display, in insertion order
    pub fn list_books(&self) -> Vec<BookShort> {
        self.books.values().map(BookShort::from).collect()
    }

    /// Borrow a book by title
    pub fn borrow(&mut self, title: &str) -> AppResult<&Book> {
        let book = self.get_book_mut(title)?;
        book.borrow()?;
        tracing::info!("Book borrowed: {}", title);
        Ok(&*book)
    }

    /// Return a book by title
    pub fn return_book(&mut self, title: &str) -> AppResult<&Book> {
        let book = self.get_book_mut(title)?;
        book.return_book()?;
        tracing::info!("Book returned: {}", title);
        Ok(&*book)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
