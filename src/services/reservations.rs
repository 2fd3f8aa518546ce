//! Seat reservation service
//!
//! Admission of candidate reservations and the administrator decision
//! lifecycle. The conflict check itself is a pure function of the candidate
//! slot and the persisted reservations for the same table/seat/date; the
//! exclusion constraint in the reservations table is what makes the decision
//! race-free at commit time.

use std::sync::Arc;

use validator::Validate;

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{
        enums::ReservationStatus,
        reservation::{NewReservation, Reservation, ReservationCandidate},
        time_slot::TimeSlot,
    },
    repository::Repository,
    services::validation_error,
};

/// Blocking reservations whose slot overlaps the candidate slot.
///
/// Only PENDING and APPROVED records block; DENIED and WAITLISTED history is
/// filtered out here even if the caller passed it in.
pub fn blocking_conflicts<'a>(
    slot: &TimeSlot,
    existing: &'a [Reservation],
) -> Vec<&'a Reservation> {
    existing
        .iter()
        .filter(|r| r.status.is_blocking() && r.time_slot.overlaps(slot))
        .collect()
}

/// Admission decision for a candidate against the current persisted state.
/// On conflict the error names the colliding record(s) so an administrator
/// can choose WAITLISTED over DENIED; waitlisting is never automatic.
pub fn admit(candidate: &ReservationCandidate, existing: &[Reservation]) -> AppResult<()> {
    let conflicts = blocking_conflicts(&candidate.time_slot, existing);
    if conflicts.is_empty() {
        return Ok(());
    }

    let details = conflicts
        .iter()
        .map(|r| format!("#{} ({} {})", r.id, r.status, r.time_slot))
        .collect::<Vec<_>>()
        .join(", ");
    Err(AppError::Conflict(format!(
        "Slot already reserved: conflicts with {}",
        details
    )))
}

/// Guard for the decision lifecycle: only a PENDING reservation may move
pub fn ensure_decidable(current: ReservationStatus) -> AppResult<()> {
    if current.is_terminal() {
        return Err(AppError::InvalidState(format!(
            "Reservation is already {}",
            current
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl ReservationsService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Submit a candidate reservation, persisting it as PENDING when the
    /// slot is free
    pub async fn submit(
        &self,
        student_id: i32,
        request: NewReservation,
    ) -> AppResult<Reservation> {
        request.validate().map_err(validation_error)?;

        let time_slot = TimeSlot::parse(&request.start_time, &request.end_time)?;

        if request.reserved_date < self.clock.today() {
            return Err(AppError::Validation(
                "Reserved date cannot be in the past".to_string(),
            ));
        }

        let table = self.repository.tables.get_by_id(request.table_id).await?;
        if !table.has_seat(request.seat_number) {
            return Err(AppError::NotFound(format!(
                "Table '{}' has no seat {}",
                table.label, request.seat_number
            )));
        }

        // Dangling book ids are rejected up front. Reservations do not touch
        // the book's availability: a reservation locks a seat and a slot,
        // never the book copy.
        self.repository.books.get_by_id(request.book_id).await?;

        let candidate = ReservationCandidate {
            student_id,
            book_id: request.book_id,
            table_id: request.table_id,
            seat_number: request.seat_number,
            reserved_date: request.reserved_date,
            time_slot,
        };

        let existing = self
            .repository
            .reservations
            .find_blocking_for_slot(candidate.table_id, candidate.seat_number, candidate.reserved_date)
            .await?;

        admit(&candidate, &existing)?;

        let reservation = self.repository.reservations.insert(&candidate).await?;
        tracing::info!(
            reservation_id = reservation.id,
            table_id = reservation.table_id,
            seat = reservation.seat_number,
            "Reservation submitted"
        );
        Ok(reservation)
    }

    /// Apply an administrator decision to a PENDING reservation
    pub async fn decide(&self, id: i32, raw_target: &str) -> AppResult<Reservation> {
        let target = ReservationStatus::parse_decision(raw_target).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "'{}' is not a valid reservation decision",
                raw_target
            ))
        })?;

        let current = self.repository.reservations.get_by_id(id).await?;
        ensure_decidable(current.status)?;

        // The CAS can still lose to a concurrent decision between the read
        // above and the write; a missing row then means the same thing as a
        // terminal status.
        match self
            .repository
            .reservations
            .update_status_if_pending(id, target)
            .await?
        {
            Some(updated) => {
                tracing::info!(reservation_id = id, status = %target, "Reservation decided");
                Ok(updated)
            }
            None => Err(AppError::InvalidState(
                "Reservation has already been decided".to_string(),
            )),
        }
    }

    /// A student's reservations, newest first
    pub async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<Reservation>> {
        self.repository.reservations.list_for_student(student_id).await
    }

    /// All reservations, optionally filtered by status
    pub async fn list(&self, status: Option<ReservationStatus>) -> AppResult<Vec<Reservation>> {
        self.repository.reservations.list(status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(start, end).unwrap()
    }

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    fn reservation(id: i32, start: &str, end: &str, status: ReservationStatus) -> Reservation {
        Reservation {
            id,
            student_id: 7,
            book_id: 1,
            table_id: 1,
            seat_number: 1,
            reserved_date: date("2024-01-15"),
            time_slot: slot(start, end),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
        }
    }

    fn candidate(start: &str, end: &str) -> ReservationCandidate {
        ReservationCandidate {
            student_id: 8,
            book_id: 1,
            table_id: 1,
            seat_number: 1,
            reserved_date: date("2024-01-15"),
            time_slot: slot(start, end),
        }
    }

    #[test]
    fn overlapping_pending_reservation_blocks() {
        let existing = vec![reservation(1, "09:00", "11:00", ReservationStatus::Pending)];
        let err = admit(&candidate("10:00", "12:00"), &existing).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn adjacent_slot_is_admitted() {
        let existing = vec![reservation(1, "09:00", "11:00", ReservationStatus::Approved)];
        assert!(admit(&candidate("11:00", "13:00"), &existing).is_ok());
    }

    #[test]
    fn identical_slot_blocks_until_denied() {
        let mut existing = vec![reservation(1, "09:00", "11:00", ReservationStatus::Pending)];
        assert!(admit(&candidate("09:00", "11:00"), &existing).is_err());

        existing[0].status = ReservationStatus::Denied;
        assert!(admit(&candidate("09:00", "11:00"), &existing).is_ok());
    }

    #[test]
    fn waitlisted_records_never_block() {
        let existing = vec![reservation(1, "09:00", "11:00", ReservationStatus::Waitlisted)];
        assert!(admit(&candidate("09:00", "11:00"), &existing).is_ok());
    }

    #[test]
    fn conflict_error_names_the_colliding_records() {
        let existing = vec![
            reservation(3, "09:00", "11:00", ReservationStatus::Approved),
            reservation(4, "10:30", "12:00", ReservationStatus::Pending),
        ];
        let err = admit(&candidate("10:00", "11:30"), &existing).unwrap_err();
        let AppError::Conflict(msg) = err else {
            panic!("expected conflict");
        };
        assert!(msg.contains("#3"));
        assert!(msg.contains("#4"));
    }

    #[test]
    fn conflicts_are_collected_from_blocking_states_only() {
        let existing = vec![
            reservation(1, "09:00", "10:00", ReservationStatus::Denied),
            reservation(2, "09:00", "10:00", ReservationStatus::Waitlisted),
            reservation(3, "09:30", "10:30", ReservationStatus::Approved),
        ];
        let found = blocking_conflicts(&slot("09:00", "10:00"), &existing);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn only_pending_is_decidable() {
        assert!(ensure_decidable(ReservationStatus::Pending).is_ok());
        for terminal in [
            ReservationStatus::Approved,
            ReservationStatus::Denied,
            ReservationStatus::Waitlisted,
        ] {
            let err = ensure_decidable(terminal).unwrap_err();
            assert!(matches!(err, AppError::InvalidState(_)), "{:?}", terminal);
        }
    }
}
