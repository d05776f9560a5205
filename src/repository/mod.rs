//! Repository layer over the in-memory catalog

pub mod books;

use crate::models::Book;

/// Main repository struct holding the catalog stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository whose catalog starts with the given books
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
        }
    }
}
