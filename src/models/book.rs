//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry with its available stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier, not checked for uniqueness
    pub id: String,
    pub title: String,
    pub author: String,
    /// Copies currently available for checkout
    pub quantity: i64,
}

/// Books present in the catalog at startup
pub fn seed_books() -> Vec<Book> {
    (1..=3)
        .map(|n| Book {
            id: n.to_string(),
            title: format!("Book {}", n),
            author: format!("Author {}", n),
            quantity: n * 10,
        })
        .collect()
}
