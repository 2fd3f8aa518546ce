//! Catalog read service (books and study tables)
//!
//! Catalog writes happen elsewhere; this core only reads the catalog to
//! resolve foreign ids and feed the browse screens.

use crate::{
    error::AppResult,
    models::{book::Book, table::StudyTable},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books, optionally filtered by genre and search term
    pub async fn list_books(
        &self,
        genre: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<Vec<Book>> {
        self.repository.books.list(genre, search).await
    }

    /// Get a single book
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// List study tables with their seat sets
    pub async fn list_tables(&self) -> AppResult<Vec<StudyTable>> {
        self.repository.tables.list().await
    }
}
