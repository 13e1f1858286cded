//! Catalog endpoints: list, categories, detail

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, Categories, SearchCriteria},
};

/// Catalog list with the "N books found" readout
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub books: Vec<Book>,
    pub total: usize,
    /// e.g. "3 books found"
    pub summary: String,
    /// Query the list was filtered with
    pub query: String,
    /// Category the list was filtered with
    pub category: String,
}

/// Book detail page
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailResponse {
    pub book: Book,
    /// Cover URI, placeholder when the book has none
    pub cover_image: String,
    /// "Available" or "Not Available"
    pub availability: String,
    /// e.g. "2 of 3 copies available"
    pub copies: String,
}

/// List category labels, "All Categories" first
#[utoipa::path(
    get,
    path = "/categories",
    tag = "books",
    responses(
        (status = 200, description = "Category labels", body = Vec<String>)
    )
)]
pub async fn list_categories(State(state): State<crate::AppState>) -> Json<Categories> {
    Json(state.services.catalog.categories().clone())
}

/// List books matching a free-text query and a category
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(SearchCriteria),
    responses(
        (status = 200, description = "Matching books in catalog order", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(criteria): Query<SearchCriteria>,
) -> Json<BookListResponse> {
    let results = state.services.catalog.search(&criteria).await;

    Json(BookListResponse {
        books: results.books,
        total: results.total,
        summary: results.summary,
        query: results.query,
        category: results.category,
    })
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<BookDetailResponse>> {
    let book = state.services.catalog.get_book(id).await?;

    Ok(Json(BookDetailResponse {
        cover_image: book
            .cover_or(&state.config.catalog.placeholder_cover)
            .to_string(),
        availability: book.availability_label().to_string(),
        copies: book.copies_label(),
        book,
    }))
}

/// Borrow a book (not available without a circulation backend)
#[utoipa::path(
    post,
    path = "/books/{id}/borrow",
    tag = "books",
    params(
        ("id" = u32, Path, description = "Book ID")
    ),
    responses(
        (status = 400, description = "Book is not available", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 501, description = "Borrowing is not implemented", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<()> {
    state.services.catalog.borrow(id).await
}

/// Reserve a book (not available without a circulation backend)
#[utoipa::path(
    post,
    path = "/books/{id}/reserve",
    tag = "books",
    params(
        ("id" = u32, Path, description = "Book ID")
    ),
    responses(
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 501, description = "Reservations are not implemented", body = crate::error::ErrorResponse)
    )
)]
pub async fn reserve_book(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<()> {
    state.services.catalog.reserve(id).await
}
