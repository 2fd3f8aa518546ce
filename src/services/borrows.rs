//! Borrow request service
//!
//! Admission happens at creation: the book must be AVAILABLE and the student
//! must hold no other PENDING request for it. The decision lifecycle mirrors
//! reservations, with one side effect: approval flips the book to BORROWED
//! in the same transaction. Nothing in this core ever flips a book back to
//! AVAILABLE (return processing is out of scope).

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{
        book::Book,
        borrow_request::{
            BorrowCandidate, BorrowRequest, NewBorrowRequest, DEFAULT_BORROW_DAYS,
            MAX_BORROW_DAYS,
        },
        enums::{AvailabilityStatus, BorrowRequestStatus},
    },
    repository::Repository,
};

/// Validate a requested borrowing window against the current instant.
/// Pastness is judged at day granularity, matching the reservation rule.
pub fn validate_window(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if to <= from {
        return Err(AppError::Validation(
            "Requested to date must be after requested from date".to_string(),
        ));
    }
    if from.date_naive() < now.date_naive() || to.date_naive() < now.date_naive() {
        return Err(AppError::Validation(
            "Requested dates cannot be in the past".to_string(),
        ));
    }
    if to - from > Duration::days(MAX_BORROW_DAYS) {
        return Err(AppError::Validation(format!(
            "Borrowing period cannot exceed {} days",
            MAX_BORROW_DAYS
        )));
    }
    Ok(())
}

/// A book admits new borrow requests only while AVAILABLE
pub fn ensure_borrowable(book: &Book) -> AppResult<()> {
    match book.availability_status {
        AvailabilityStatus::Available => Ok(()),
        other => Err(AppError::Conflict(format!(
            "Book is not available for borrowing (currently {})",
            other
        ))),
    }
}

/// Guard for the decision lifecycle: only a PENDING request may move
pub fn ensure_decidable(current: BorrowRequestStatus) -> AppResult<()> {
    if current.is_terminal() {
        return Err(AppError::InvalidState(format!(
            "Borrow request is already {}",
            current
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl BorrowsService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Submit a borrow request, persisting it as PENDING. When no window is
    /// given the default one starts at submission time.
    pub async fn submit(
        &self,
        student_id: i32,
        request: NewBorrowRequest,
    ) -> AppResult<BorrowRequest> {
        let now = self.clock.now();
        let from = request.requested_from.unwrap_or(now);
        let to = request
            .requested_to
            .unwrap_or(from + Duration::days(DEFAULT_BORROW_DAYS));

        validate_window(from, to, now)?;

        let book = self.repository.books.get_by_id(request.book_id).await?;
        ensure_borrowable(&book)?;

        // Advisory duplicate check; the partial unique index catches the
        // race between two concurrent submissions.
        if self
            .repository
            .borrow_requests
            .find_pending(student_id, book.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You already have a pending request for this book".to_string(),
            ));
        }

        let candidate = BorrowCandidate {
            student_id,
            book_id: book.id,
            requested_from: from,
            requested_to: to,
        };

        let created = self.repository.borrow_requests.insert(&candidate).await?;
        tracing::info!(
            request_id = created.id,
            book_id = created.book_id,
            "Borrow request submitted"
        );
        Ok(created)
    }

    /// Apply an administrator decision to a PENDING borrow request.
    /// On APPROVED the book flips to BORROWED atomically with the status.
    pub async fn decide(&self, id: i32, raw_target: &str) -> AppResult<BorrowRequest> {
        let target = BorrowRequestStatus::parse_decision(raw_target).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "'{}' is not a valid borrow request decision",
                raw_target
            ))
        })?;

        let current = self.repository.borrow_requests.get_by_id(id).await?;
        ensure_decidable(current.status)?;

        match self
            .repository
            .borrow_requests
            .decide_if_pending(id, target)
            .await?
        {
            Some(updated) => {
                tracing::info!(request_id = id, status = %target, "Borrow request decided");
                Ok(updated)
            }
            None => Err(AppError::InvalidState(
                "Borrow request has already been decided".to_string(),
            )),
        }
    }

    /// A student's borrow requests, newest first
    pub async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<BorrowRequest>> {
        self.repository.borrow_requests.list_for_student(student_id).await
    }

    /// All borrow requests, optionally filtered by status
    pub async fn list(
        &self,
        status: Option<BorrowRequestStatus>,
    ) -> AppResult<Vec<BorrowRequest>> {
        self.repository.borrow_requests.list(status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    fn book(status: AvailabilityStatus) -> Book {
        Book {
            id: 1,
            title: "The Rust Programming Language".to_string(),
            author: "Klabnik & Nichols".to_string(),
            genre: "Technical".to_string(),
            description: "The official book on the language".to_string(),
            cover_image_url: None,
            availability_status: status,
            added_by: 1,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn default_window_is_valid() {
        let from = now();
        let to = from + Duration::days(DEFAULT_BORROW_DAYS);
        assert!(validate_window(from, to, now()).is_ok());
    }

    #[test]
    fn window_must_be_forward() {
        let from = now();
        assert!(validate_window(from, from, now()).is_err());
        assert!(validate_window(from, from - Duration::days(1), now()).is_err());
    }

    #[test]
    fn window_is_capped_at_max_days() {
        let from = now();
        assert!(validate_window(from, from + Duration::days(30), now()).is_ok());
        let err = validate_window(from, from + Duration::days(31), now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn past_dates_are_rejected() {
        let from = now() - Duration::days(2);
        let to = now() + Duration::days(5);
        assert!(validate_window(from, to, now()).is_err());
    }

    #[test]
    fn same_day_earlier_time_is_not_past() {
        // Pastness is day-granular
        let from = now() - Duration::hours(3);
        let to = from + Duration::days(7);
        assert!(validate_window(from, to, now()).is_ok());
    }

    #[test]
    fn only_available_books_are_borrowable() {
        assert!(ensure_borrowable(&book(AvailabilityStatus::Available)).is_ok());
        for status in [
            AvailabilityStatus::Borrowed,
            AvailabilityStatus::Reserved,
            AvailabilityStatus::Maintenance,
        ] {
            let err = ensure_borrowable(&book(status)).unwrap_err();
            assert!(matches!(err, AppError::Conflict(_)), "{:?}", status);
        }
    }

    #[test]
    fn decided_requests_are_terminal() {
        assert!(ensure_decidable(BorrowRequestStatus::Pending).is_ok());
        for terminal in [BorrowRequestStatus::Approved, BorrowRequestStatus::Denied] {
            assert!(ensure_decidable(terminal).is_err(), "{:?}", terminal);
        }
    }
}
