//! Business logic services

pub mod borrows;
pub mod catalog;
pub mod reservations;
pub mod stats;

use std::sync::Arc;

use crate::{clock::Clock, error::AppError, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub reservations: reservations::ReservationsService,
    pub borrows: borrows::BorrowsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository and clock
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository.clone(), clock.clone()),
            borrows: borrows::BorrowsService::new(repository.clone(), clock),
            stats: stats::StatsService::new(repository),
        }
    }
}

/// Flatten validator errors into a single boundary error
pub(crate) fn validation_error(errors: validator::ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => format!("{}: {}", field, m),
                None => format!("{}: invalid value", field),
            })
        })
        .collect::<Vec<_>>()
        .join("; ");
    AppError::Validation(message)
}
