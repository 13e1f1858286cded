//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::{admin, books, dashboard, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "St Pauls eLibrary API",
        version = "0.1.0",
        description = "Catalog browsing, book details, dashboard and admin views",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_categories,
        books::list_books,
        books::get_book,
        books::borrow_book,
        books::reserve_book,
        // Dashboard
        dashboard::get_dashboard,
        dashboard::renew,
        dashboard::history,
        // Admin
        admin::list_books,
        admin::create_book,
        admin::delete_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::NewBook,
            crate::models::book::SearchCriteria,
            books::BookListResponse,
            books::BookDetailResponse,
            // Dashboard
            crate::models::borrowed::BorrowedBookView,
            crate::models::borrowed::DashboardSummary,
            // Admin
            admin::AdminBooksResponse,
            admin::AdminBookResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog browsing"),
        (name = "dashboard", description = "Borrowed books overview"),
        (name = "admin", description = "Catalog management")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
