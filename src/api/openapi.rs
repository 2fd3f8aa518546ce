//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{borrow_requests, catalog, health, reservations, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "StudyHall API",
        version = "1.0.0",
        description = "Library administration REST API: catalog, borrow requests, seat reservations",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        catalog::list_books,
        catalog::get_book,
        catalog::list_tables,
        // Reservations
        reservations::submit_reservation,
        reservations::list_my_reservations,
        reservations::decide_reservation,
        reservations::list_reservations,
        // Borrow requests
        borrow_requests::submit_borrow_request,
        borrow_requests::list_my_borrow_requests,
        borrow_requests::decide_borrow_request,
        borrow_requests::list_borrow_requests,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Catalog
            crate::models::book::Book,
            crate::models::table::StudyTable,
            crate::models::enums::AvailabilityStatus,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::NewReservation,
            crate::models::time_slot::TimeSlot,
            crate::models::enums::ReservationStatus,
            reservations::ReservationDecision,
            // Borrow requests
            crate::models::borrow_request::BorrowRequest,
            crate::models::borrow_request::NewBorrowRequest,
            crate::models::enums::BorrowRequestStatus,
            borrow_requests::BorrowDecision,
            // Stats
            stats::StatsResponse,
            stats::BookStatusEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Book and table browsing"),
        (name = "reservations", description = "Seat reservation management"),
        (name = "borrow-requests", description = "Borrow request management"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
