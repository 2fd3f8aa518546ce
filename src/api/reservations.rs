//! Seat reservation endpoints

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
        enums::ReservationStatus,
        reservation::{NewReservation, Reservation},
    },
};

use super::AuthenticatedUser;

/// Administrator decision body
#[derive(Deserialize, ToSchema)]
pub struct ReservationDecision {
    /// Target status: APPROVED, DENIED or WAITLISTED
    pub status: String,
}

/// Status filter for admin listings
#[derive(Deserialize, IntoParams)]
pub struct StatusFilter {
    /// Restrict to one status (e.g. PENDING)
    pub status: Option<String>,
}

/// Submit a candidate seat reservation
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    request_body = NewReservation,
    responses(
        (status = 201, description = "Reservation created as PENDING", body = Reservation),
        (status = 400, description = "Malformed time slot or past date"),
        (status = 404, description = "Table, seat or book not found"),
        (status = 409, description = "Slot already reserved")
    )
)]
pub async fn submit_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<NewReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state
        .services
        .reservations
        .submit(claims.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// List the acting student's reservations
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reservations, newest first", body = Vec<Reservation>)
    )
)]
pub async fn list_my_reservations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state
        .services
        .reservations
        .list_for_student(claims.user_id)
        .await?;
    Ok(Json(reservations))
}

/// Apply an administrator decision to a pending reservation
#[utoipa::path(
    patch,
    path = "/reservations/{id}",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationDecision,
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 400, description = "Invalid target status or already decided"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn decide_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<ReservationDecision>,
) -> AppResult<Json<Reservation>> {
    claims.require_admin()?;

    let reservation = state.services.reservations.decide(id, &request.status).await?;
    Ok(Json(reservation))
}

/// List all reservations (admin decision screen)
#[utoipa::path(
    get,
    path = "/admin/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(StatusFilter),
    responses(
        (status = 200, description = "Reservations, newest first", body = Vec<Reservation>)
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<Vec<Reservation>>> {
    claims.require_admin()?;

    let status = filter
        .status
        .as_deref()
        .map(parse_status_filter)
        .transpose()?;
    let reservations = state.services.reservations.list(status).await?;
    Ok(Json(reservations))
}

fn parse_status_filter(raw: &str) -> AppResult<ReservationStatus> {
    match raw {
        "PENDING" => Ok(ReservationStatus::Pending),
        "APPROVED" => Ok(ReservationStatus::Approved),
        "DENIED" => Ok(ReservationStatus::Denied),
        "WAITLISTED" => Ok(ReservationStatus::Waitlisted),
        other => Err(AppError::Validation(format!(
            "'{}' is not a reservation status",
            other
        ))),
    }
}
