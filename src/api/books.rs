//! Book (catalog) endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::{AppError, AppResult},
    models::Book,
    AppState,
};

use super::PrettyJson;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> PrettyJson<Vec<Book>> {
    PrettyJson(state.services.catalog.list_books().await)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<PrettyJson<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(PrettyJson(book))
}

/// Add a book to the catalog.
///
/// The body is decoded as JSON whatever its content type.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed book payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, PrettyJson<Book>)> {
    let book: Book = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid book payload: {}", e)))?;

    let created = state.services.catalog.add_book(book).await;
    Ok((StatusCode::CREATED, PrettyJson(created)))
}
