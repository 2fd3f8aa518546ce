//! Statistics service for the admin dashboard

use crate::{
    api::stats::{BookStatusEntry, StatsResponse},
    error::AppResult,
    models::enums::{AvailabilityStatus, BorrowRequestStatus, ReservationStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Cheap database round-trip for the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.repository.pool).await?;
        Ok(())
    }

    /// Pending workload counts plus the book availability breakdown
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let pending_reservations = self
            .repository
            .reservations
            .count_with_status(ReservationStatus::Pending)
            .await?;
        let pending_borrow_requests = self
            .repository
            .borrow_requests
            .count_with_status(BorrowRequestStatus::Pending)
            .await?;

        let books_by_status = self
            .repository
            .books
            .count_by_status()
            .await?
            .into_iter()
            .map(|(code, count)| BookStatusEntry {
                status: AvailabilityStatus::from(code),
                count,
            })
            .collect();

        Ok(StatsResponse {
            pending_reservations,
            pending_borrow_requests,
            books_by_status,
        })
    }
}
