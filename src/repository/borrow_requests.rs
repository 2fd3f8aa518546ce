//! Borrow requests repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow_request::{BorrowCandidate, BorrowRequest, BorrowRequestRow},
        enums::BorrowRequestStatus,
    },
    repository::{books::BooksRepository, is_constraint_violation},
};

#[derive(Clone)]
pub struct BorrowRequestsRepository {
    pool: Pool<Postgres>,
}

impl BorrowRequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get borrow request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowRequest> {
        sqlx::query_as::<_, BorrowRequestRow>("SELECT * FROM borrow_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(BorrowRequest::from)
            .ok_or_else(|| AppError::NotFound(format!("Borrow request with id {} not found", id)))
    }

    /// The student's PENDING request for a book, if any
    pub async fn find_pending(
        &self,
        student_id: i32,
        book_id: i32,
    ) -> AppResult<Option<BorrowRequest>> {
        let row = sqlx::query_as::<_, BorrowRequestRow>(
            "SELECT * FROM borrow_requests WHERE student_id = $1 AND book_id = $2 AND status = $3",
        )
        .bind(student_id)
        .bind(book_id)
        .bind(i16::from(BorrowRequestStatus::Pending))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BorrowRequest::from))
    }

    /// Persist a candidate as PENDING.
    ///
    /// The partial unique index on (student_id, book_id) for PENDING rows is
    /// the race-free duplicate guard; a violation means a concurrent
    /// submission won.
    pub async fn insert(&self, candidate: &BorrowCandidate) -> AppResult<BorrowRequest> {
        let row = sqlx::query_as::<_, BorrowRequestRow>(
            r#"
            INSERT INTO borrow_requests
                (student_id, book_id, requested_from, requested_to, status, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING *
            "#,
        )
        .bind(candidate.student_id)
        .bind(candidate.book_id)
        .bind(candidate.requested_from)
        .bind(candidate.requested_to)
        .bind(i16::from(BorrowRequestStatus::Pending))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_constraint_violation(&e) {
                AppError::Conflict(
                    "You already have a pending request for this book".to_string(),
                )
            } else {
                e.into()
            }
        })?;

        Ok(row.into())
    }

    /// Decide a PENDING request with a compare-and-swap, flipping the book
    /// to BORROWED in the same transaction when the decision is APPROVED.
    /// Returns None when the record was already decided (stale decision).
    pub async fn decide_if_pending(
        &self,
        id: i32,
        target: BorrowRequestStatus,
    ) -> AppResult<Option<BorrowRequest>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BorrowRequestRow>(
            "UPDATE borrow_requests SET status = $2 WHERE id = $1 AND status = $3 RETURNING *",
        )
        .bind(id)
        .bind(i16::from(target))
        .bind(i16::from(BorrowRequestStatus::Pending))
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        if target == BorrowRequestStatus::Approved {
            BooksRepository::mark_borrowed(&mut tx, row.book_id).await?;
        }

        tx.commit().await?;
        Ok(Some(row.into()))
    }

    /// A student's borrow requests, newest first
    pub async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<BorrowRequest>> {
        let rows = sqlx::query_as::<_, BorrowRequestRow>(
            "SELECT * FROM borrow_requests WHERE student_id = $1 ORDER BY created_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BorrowRequest::from).collect())
    }

    /// All borrow requests, optionally filtered by status (admin screen)
    pub async fn list(
        &self,
        status: Option<BorrowRequestStatus>,
    ) -> AppResult<Vec<BorrowRequest>> {
        let rows = sqlx::query_as::<_, BorrowRequestRow>(
            r#"
            SELECT * FROM borrow_requests
            WHERE ($1::smallint IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status.map(i16::from))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BorrowRequest::from).collect())
    }

    /// Count requests in a given status
    pub async fn count_with_status(&self, status: BorrowRequestStatus) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM borrow_requests WHERE status = $1")
                .bind(i16::from(status))
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
