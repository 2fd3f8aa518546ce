//! Borrow request model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::BorrowRequestStatus;

/// Maximum borrowing window in days
pub const MAX_BORROW_DAYS: i64 = 30;

/// Default borrowing window granted at submission
pub const DEFAULT_BORROW_DAYS: i64 = 14;

/// Borrow request for a single book copy
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowRequest {
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub requested_from: DateTime<Utc>,
    pub requested_to: DateTime<Utc>,
    pub status: BorrowRequestStatus,
    pub created_at: DateTime<Utc>,
}

/// Borrow request row as stored (status as smallint code)
#[derive(Debug, Clone, FromRow)]
pub struct BorrowRequestRow {
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub requested_from: DateTime<Utc>,
    pub requested_to: DateTime<Utc>,
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

impl From<BorrowRequestRow> for BorrowRequest {
    fn from(r: BorrowRequestRow) -> Self {
        Self {
            id: r.id,
            student_id: r.student_id,
            book_id: r.book_id,
            requested_from: r.requested_from,
            requested_to: r.requested_to,
            status: r.status.into(),
            created_at: r.created_at,
        }
    }
}

/// Borrow request submission body. The window is optional; when absent the
/// default window starting at submission time is used.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewBorrowRequest {
    pub book_id: i32,
    pub requested_from: Option<DateTime<Utc>>,
    pub requested_to: Option<DateTime<Utc>>,
}

/// Validated borrow candidate ready for persistence
#[derive(Debug, Clone)]
pub struct BorrowCandidate {
    pub student_id: i32,
    pub book_id: i32,
    pub requested_from: DateTime<Utc>,
    pub requested_to: DateTime<Utc>,
}
