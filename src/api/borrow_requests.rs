//! Borrow request endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow_request::{BorrowRequest, NewBorrowRequest},
        enums::BorrowRequestStatus,
    },
};

use super::AuthenticatedUser;

/// Administrator decision body
#[derive(Deserialize, ToSchema)]
pub struct BorrowDecision {
    /// Target status: APPROVED or DENIED
    pub status: String,
}

/// Status filter for admin listings
#[derive(Deserialize, IntoParams)]
pub struct StatusFilter {
    /// Restrict to one status (e.g. PENDING)
    pub status: Option<String>,
}

/// Submit a borrow request for a book
#[utoipa::path(
    post,
    path = "/borrow-requests",
    tag = "borrow-requests",
    security(("bearer_auth" = [])),
    request_body = NewBorrowRequest,
    responses(
        (status = 201, description = "Request created as PENDING", body = BorrowRequest),
        (status = 400, description = "Invalid borrowing window"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book unavailable or duplicate pending request")
    )
)]
pub async fn submit_borrow_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<NewBorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowRequest>)> {
    let created = state
        .services
        .borrows
        .submit(claims.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List the acting student's borrow requests
#[utoipa::path(
    get,
    path = "/borrow-requests",
    tag = "borrow-requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Borrow requests, newest first", body = Vec<BorrowRequest>)
    )
)]
pub async fn list_my_borrow_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BorrowRequest>>> {
    let requests = state
        .services
        .borrows
        .list_for_student(claims.user_id)
        .await?;
    Ok(Json(requests))
}

/// Apply an administrator decision to a pending borrow request
#[utoipa::path(
    patch,
    path = "/borrow-requests/{id}",
    tag = "borrow-requests",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Borrow request ID")
    ),
    request_body = BorrowDecision,
    responses(
        (status = 200, description = "Request updated; book flipped to BORROWED on approval", body = BorrowRequest),
        (status = 400, description = "Invalid target status or already decided"),
        (status = 404, description = "Borrow request not found")
    )
)]
pub async fn decide_borrow_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<BorrowDecision>,
) -> AppResult<Json<BorrowRequest>> {
    claims.require_admin()?;

    let updated = state.services.borrows.decide(id, &request.status).await?;
    Ok(Json(updated))
}

/// List all borrow requests (admin decision screen)
#[utoipa::path(
    get,
    path = "/admin/borrow-requests",
    tag = "borrow-requests",
    security(("bearer_auth" = [])),
    params(StatusFilter),
    responses(
        (status = 200, description = "Borrow requests, newest first", body = Vec<BorrowRequest>)
    )
)]
pub async fn list_borrow_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<Vec<BorrowRequest>>> {
    claims.require_admin()?;

    let status = filter
        .status
        .as_deref()
        .map(parse_status_filter)
        .transpose()?;
    let requests = state.services.borrows.list(status).await?;
    Ok(Json(requests))
}

fn parse_status_filter(raw: &str) -> AppResult<BorrowRequestStatus> {
    match raw {
        "PENDING" => Ok(BorrowRequestStatus::Pending),
        "APPROVED" => Ok(BorrowRequestStatus::Approved),
        "DENIED" => Ok(BorrowRequestStatus::Denied),
        other => Err(AppError::Validation(format!(
            "'{}' is not a borrow request status",
            other
        ))),
    }
}
