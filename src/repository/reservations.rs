//! Reservations repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ReservationStatus,
        reservation::{Reservation, ReservationCandidate, ReservationRow},
    },
    repository::is_constraint_violation,
};

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reservation> {
        sqlx::query_as::<_, ReservationRow>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Reservation::from)
            .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", id)))
    }

    /// Reservations in blocking states (PENDING, APPROVED) for one
    /// table/seat/date, ordered by start time
    pub async fn find_blocking_for_slot(
        &self,
        table_id: i32,
        seat_number: i32,
        reserved_date: NaiveDate,
    ) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT * FROM reservations
            WHERE table_id = $1 AND seat_number = $2 AND reserved_date = $3
              AND status IN ($4, $5)
            ORDER BY start_time
            "#,
        )
        .bind(table_id)
        .bind(seat_number)
        .bind(reserved_date)
        .bind(i16::from(ReservationStatus::Pending))
        .bind(i16::from(ReservationStatus::Approved))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    /// Persist a candidate as PENDING.
    ///
    /// The advisory conflict check has already passed; the exclusion
    /// constraint on blocking slots is the race-free guarantee, so a
    /// constraint violation here means a concurrent submission won and is
    /// reported as a conflict, not a database failure.
    pub async fn insert(&self, candidate: &ReservationCandidate) -> AppResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            INSERT INTO reservations
                (student_id, book_id, table_id, seat_number, reserved_date,
                 start_time, end_time, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING *
            "#,
        )
        .bind(candidate.student_id)
        .bind(candidate.book_id)
        .bind(candidate.table_id)
        .bind(candidate.seat_number)
        .bind(candidate.reserved_date)
        .bind(candidate.time_slot.start)
        .bind(candidate.time_slot.end)
        .bind(i16::from(ReservationStatus::Pending))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_constraint_violation(&e) {
                AppError::Conflict("Slot already reserved".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(row.into())
    }

    /// Compare-and-swap status update: only a PENDING reservation moves.
    /// Returns the updated record, or None when the record was already
    /// decided by the time the write landed.
    pub async fn update_status_if_pending(
        &self,
        id: i32,
        target: ReservationStatus,
    ) -> AppResult<Option<Reservation>> {
        let row = sqlx::query_as::<_, ReservationRow>(
            "UPDATE reservations SET status = $2 WHERE id = $1 AND status = $3 RETURNING *",
        )
        .bind(id)
        .bind(i16::from(target))
        .bind(i16::from(ReservationStatus::Pending))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reservation::from))
    }

    /// A student's reservations, newest first
    pub async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT * FROM reservations WHERE student_id = $1 ORDER BY created_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    /// All reservations, optionally filtered by status (admin decision screen)
    pub async fn list(&self, status: Option<ReservationStatus>) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT * FROM reservations
            WHERE ($1::smallint IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status.map(i16::from))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    /// Count reservations in a given status
    pub async fn count_with_status(&self, status: ReservationStatus) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE status = $1")
                .bind(i16::from(status))
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
