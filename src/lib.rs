//! Book Catalog
//!
//! A small REST JSON API over an in-memory catalog of books, with
//! checkout and return operations that track available stock.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state with a catalog seeded with the default books
    pub fn new() -> Self {
        let repository = repository::Repository::new(models::book::seed_books());
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
