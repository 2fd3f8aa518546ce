//! Book catalog model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::AvailabilityStatus;

/// Book with decoded availability status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub availability_status: AvailabilityStatus,
    pub added_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book row as stored (status as smallint code)
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub availability_status: i16,
    pub added_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            author: r.author,
            genre: r.genre,
            description: r.description,
            cover_image_url: r.cover_image_url,
            availability_status: r.availability_status.into(),
            added_by: r.added_by,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
