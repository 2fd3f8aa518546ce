//! Admin dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::enums::AvailabilityStatus};

use super::AuthenticatedUser;

/// Book count for one availability status
#[derive(Serialize, ToSchema)]
pub struct BookStatusEntry {
    pub status: AvailabilityStatus,
    pub count: i64,
}

/// Dashboard statistics
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Reservations awaiting a decision
    pub pending_reservations: i64,
    /// Borrow requests awaiting a decision
    pub pending_borrow_requests: i64,
    /// Book availability breakdown
    pub books_by_status: Vec<BookStatusEntry>,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<StatsResponse>> {
    claims.require_admin()?;

    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
