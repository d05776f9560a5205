//! Catalog management service

use crate::{error::AppResult, models::Book, repository::Repository};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in insertion order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Get the first book with the given id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Append a book to the catalog. Ids are not checked for uniqueness.
    pub async fn add_book(&self, book: Book) -> Book {
        let created = self.repository.books.insert(book).await;
        tracing::info!(
            "Catalog: added book id={} title={:?} quantity={}",
            created.id,
            created.title,
            created.quantity
        );
        created
    }

    /// Number of records in the catalog
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}
