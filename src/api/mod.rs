//! API handlers for the eLibrary REST endpoints

pub mod admin;
pub mod books;
pub mod dashboard;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Catalog
        .route("/categories", get(books::list_categories))
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id/borrow", post(books::borrow_book))
        .route("/books/:id/reserve", post(books::reserve_book))
        // Dashboard
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/dashboard/renew", post(dashboard::renew))
        .route("/dashboard/history", get(dashboard::history))
        // Admin
        .route("/admin/books", get(admin::list_books).post(admin::create_book))
        .route("/admin/books/:id", delete(admin::delete_book))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
