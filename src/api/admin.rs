//! Admin endpoints: manage the in-memory catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, NewBook},
};

#[derive(Serialize, ToSchema)]
pub struct AdminBooksResponse {
    pub books: Vec<Book>,
    pub total: usize,
}

/// Book affected by an admin action, with the confirmation shown to the user
#[derive(Serialize, ToSchema)]
pub struct AdminBookResponse {
    pub book: Book,
    pub message: String,
}

/// List every book for management
#[utoipa::path(
    get,
    path = "/admin/books",
    tag = "admin",
    operation_id = "admin_list_books",
    responses(
        (status = 200, description = "All books", body = AdminBooksResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<AdminBooksResponse> {
    let books = state.services.admin.list_books().await;
    Json(AdminBooksResponse {
        total: books.len(),
        books,
    })
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/admin/books",
    tag = "admin",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book added", body = AdminBookResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(new_book): Json<NewBook>,
) -> AppResult<(StatusCode, Json<AdminBookResponse>)> {
    let (book, message) = state.services.admin.add_book(new_book).await?;
    Ok((StatusCode::CREATED, Json(AdminBookResponse { book, message })))
}

/// Remove a book from the catalog
#[utoipa::path(
    delete,
    path = "/admin/books/{id}",
    tag = "admin",
    params(
        ("id" = u32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book removed", body = AdminBookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<AdminBookResponse>> {
    let (book, message) = state.services.admin.delete_book(id).await?;
    Ok(Json(AdminBookResponse { book, message }))
}
