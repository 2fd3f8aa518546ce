//! Seat reservation model and related types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::ReservationStatus;
use super::time_slot::TimeSlot;

/// Seat reservation. Records are never deleted; denied and waitlisted
/// reservations are kept as history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub table_id: i32,
    pub seat_number: i32,
    #[schema(value_type = String, example = "2024-01-15")]
    pub reserved_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// Reservation row as stored (flat slot columns, status as smallint)
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub table_id: i32,
    pub seat_number: i32,
    pub reserved_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(r: ReservationRow) -> Self {
        Self {
            id: r.id,
            student_id: r.student_id,
            book_id: r.book_id,
            table_id: r.table_id,
            seat_number: r.seat_number,
            reserved_date: r.reserved_date,
            time_slot: TimeSlot {
                start: r.start_time,
                end: r.end_time,
            },
            status: r.status.into(),
            created_at: r.created_at,
        }
    }
}

/// Candidate reservation as submitted by a student
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewReservation {
    pub book_id: i32,
    pub table_id: i32,
    #[validate(range(min = 1, max = 100, message = "Seat number must be between 1 and 100"))]
    pub seat_number: i32,
    /// Date of the reservation (YYYY-MM-DD)
    #[schema(value_type = String, example = "2024-01-15")]
    pub reserved_date: NaiveDate,
    /// Start of the slot (HH:MM, 24-hour)
    pub start_time: String,
    /// End of the slot (HH:MM, 24-hour)
    pub end_time: String,
}

/// Validated candidate ready for persistence
#[derive(Debug, Clone)]
pub struct ReservationCandidate {
    pub student_id: i32,
    pub book_id: i32,
    pub table_id: i32,
    pub seat_number: i32,
    pub reserved_date: NaiveDate,
    pub time_slot: TimeSlot,
}
