//! Checkout and return of books (stock movements)

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Take one copy out of stock
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .update(id, |book| {
                if book.quantity <= 0 {
                    return Err(AppError::BadRequest("Book is out of stock".to_string()));
                }
                book.quantity -= 1;
                Ok(())
            })
            .await?;

        tracing::info!("Checkout: book id={} quantity={}", book.id, book.quantity);
        Ok(book)
    }

    /// Put one copy back into stock
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .update(id, |book| {
                book.quantity = book
                    .quantity
                    .checked_add(1)
                    .ok_or_else(|| AppError::BadRequest("Book quantity overflow".to_string()))?;
                Ok(())
            })
            .await?;

        tracing::info!("Return: book id={} quantity={}", book.id, book.quantity);
        Ok(book)
    }
}
