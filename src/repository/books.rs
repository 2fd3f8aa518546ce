//! Books repository for database operations

use sqlx::{Pool, Postgres, Transaction};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookRow},
        enums::AvailabilityStatus,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, BookRow>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Book::from)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List books, optionally filtered by genre and a title/author search term
    pub async fn list(&self, genre: Option<&str>, search: Option<&str>) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT * FROM books
            WHERE ($1::text IS NULL OR genre = $1)
              AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%' OR author ILIKE '%' || $2 || '%')
            ORDER BY title
            "#,
        )
        .bind(genre)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Flip a book to BORROWED within an open transaction.
    ///
    /// This is the only availability writer in the core; it runs inside the
    /// borrow approval transaction so the status flip and the request update
    /// commit together.
    pub async fn mark_borrowed(
        tx: &mut Transaction<'_, Postgres>,
        book_id: i32,
    ) -> AppResult<()> {
        let updated = sqlx::query(
            "UPDATE books SET availability_status = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(i16::from(AvailabilityStatus::Borrowed))
        .bind(book_id)
        .execute(&mut **tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book with id {} not found",
                book_id
            )));
        }
        Ok(())
    }

    /// Count books per availability status (admin dashboard)
    pub async fn count_by_status(&self) -> AppResult<Vec<(i16, i64)>> {
        let rows = sqlx::query_as::<_, (i16, i64)>(
            "SELECT availability_status, COUNT(*) FROM books GROUP BY availability_status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
