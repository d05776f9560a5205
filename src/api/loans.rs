//! Checkout and return endpoints

use axum::extract::State;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    AppState,
};

use super::{AppQuery, PrettyJson};

/// Query string pairs, in request order
type QueryPairs = Vec<(String, String)>;

/// First `id` in the query string; later repetitions are ignored
fn required_id(pairs: QueryPairs) -> AppResult<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .ok_or_else(|| AppError::BadRequest("Missing book".to_string()))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout/",
    tag = "loans",
    params(
        ("id" = Option<String>, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book checked out", body = Book),
        (status = 400, description = "Missing book or book is out of stock", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<AppState>,
    AppQuery(pairs): AppQuery<QueryPairs>,
) -> AppResult<PrettyJson<Book>> {
    let id = required_id(pairs)?;
    let book = state.services.loans.checkout(&id).await?;
    Ok(PrettyJson(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return/",
    tag = "loans",
    params(
        ("id" = Option<String>, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 400, description = "Missing book", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    AppQuery(pairs): AppQuery<QueryPairs>,
) -> AppResult<PrettyJson<Book>> {
    let id = required_id(pairs)?;
    let book = state.services.loans.return_book(&id).await?;
    Ok(PrettyJson(book))
}
