//! In-memory book store

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Ordered books plus an id index pointing at the first record carrying each id.
#[derive(Default)]
struct Catalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

impl Catalog {
    fn push(&mut self, book: Book) {
        let position = self.books.len();
        self.index.entry(book.id.clone()).or_insert(position);
        self.books.push(book);
    }

    fn position(&self, id: &str) -> AppResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| AppError::NotFound("book not found".to_string()))
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        let mut catalog = Catalog::default();
        for book in books {
            catalog.push(book);
        }
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// All books in insertion order, duplicates included
    pub async fn list(&self) -> Vec<Book> {
        self.catalog.read().await.books.clone()
    }

    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let catalog = self.catalog.read().await;
        let position = catalog.position(id)?;
        Ok(catalog.books[position].clone())
    }

    /// Append a book. A duplicate id is stored but stays unreachable by id.
    pub async fn insert(&self, book: Book) -> Book {
        self.catalog.write().await.push(book.clone());
        book
    }

    /// Apply `f` to the first book with `id` while holding the write lock.
    ///
    /// `f` works on a copy; the stored record only changes when it returns `Ok`.
    pub async fn update<F>(&self, id: &str, f: F) -> AppResult<Book>
    where
        F: FnOnce(&mut Book) -> AppResult<()>,
    {
        let mut catalog = self.catalog.write().await;
        let position = catalog.position(id)?;

        let mut book = catalog.books[position].clone();
        f(&mut book)?;
        catalog.books[position] = book.clone();
        Ok(book)
    }

    pub async fn count(&self) -> usize {
        self.catalog.read().await.books.len()
    }
}
