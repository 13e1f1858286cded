//! Dashboard endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::DashboardSummary};

/// Currently borrowed books and overdue count
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard overview", body = DashboardSummary)
    )
)]
pub async fn get_dashboard(State(state): State<crate::AppState>) -> Json<DashboardSummary> {
    Json(state.services.dashboard.summary())
}

/// Renew borrowed books
#[utoipa::path(
    post,
    path = "/dashboard/renew",
    tag = "dashboard",
    responses(
        (status = 501, description = "Renewal is not implemented", body = crate::error::ErrorResponse)
    )
)]
pub async fn renew(State(state): State<crate::AppState>) -> AppResult<()> {
    state.services.dashboard.renew()
}

/// Borrowing history
#[utoipa::path(
    get,
    path = "/dashboard/history",
    tag = "dashboard",
    responses(
        (status = 501, description = "History is not implemented", body = crate::error::ErrorResponse)
    )
)]
pub async fn history(State(state): State<crate::AppState>) -> AppResult<()> {
    state.services.dashboard.history()
}
