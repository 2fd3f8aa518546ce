//! Repository layer for database operations

pub mod books;
pub mod borrow_requests;
pub mod reservations;
pub mod tables;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub tables: tables::TablesRepository,
    pub reservations: reservations::ReservationsRepository,
    pub borrow_requests: borrow_requests::BorrowRequestsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            tables: tables::TablesRepository::new(pool.clone()),
            reservations: reservations::ReservationsRepository::new(pool.clone()),
            borrow_requests: borrow_requests::BorrowRequestsRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Whether a database error is a unique or exclusion constraint violation.
/// 23505 = unique_violation, 23P01 = exclusion_violation.
pub(crate) fn is_constraint_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.code().as_deref(), Some("23505") | Some("23P01"))
        }
        _ => false,
    }
}
