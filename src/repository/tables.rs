//! Study tables repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::table::StudyTable,
};

#[derive(Clone)]
pub struct TablesRepository {
    pool: Pool<Postgres>,
}

impl TablesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get table by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<StudyTable> {
        sqlx::query_as::<_, StudyTable>("SELECT id, label, seats FROM study_tables WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Table with id {} not found", id)))
    }

    /// List all tables with their seat sets
    pub async fn list(&self) -> AppResult<Vec<StudyTable>> {
        let tables = sqlx::query_as::<_, StudyTable>(
            "SELECT id, label, seats FROM study_tables ORDER BY label",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tables)
    }
}
