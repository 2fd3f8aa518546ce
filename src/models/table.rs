//! Study table model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A study table with its fixed seat set.
/// Labels are unique, seat numbers unique and non-empty. Immutable here;
/// table CRUD lives outside this core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudyTable {
    pub id: i32,
    pub label: String,
    pub seats: Vec<i32>,
}

impl StudyTable {
    pub fn has_seat(&self, seat_number: i32) -> bool {
        self.seats.contains(&seat_number)
    }
}
