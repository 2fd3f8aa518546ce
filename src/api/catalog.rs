//! Catalog browse endpoints (books and study tables)

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{book::Book, table::StudyTable},
};

use super::AuthenticatedUser;

/// Book listing filters
#[derive(Deserialize, IntoParams)]
pub struct BookFilter {
    /// Restrict to one genre
    pub genre: Option<String>,
    /// Case-insensitive title/author search
    pub search: Option<String>,
}

/// List books
#[utoipa::path(
    get,
    path = "/books",
    tag = "catalog",
    security(("bearer_auth" = [])),
    params(BookFilter),
    responses(
        (status = 200, description = "Books ordered by title", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<BookFilter>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .catalog
        .list_books(filter.genre.as_deref(), filter.search.as_deref())
        .await?;
    Ok(Json(books))
}

/// Get a single book
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "catalog",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// List study tables with their seat sets
#[utoipa::path(
    get,
    path = "/tables",
    tag = "catalog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tables ordered by label", body = Vec<StudyTable>)
    )
)]
pub async fn list_tables(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<StudyTable>>> {
    let tables = state.services.catalog.list_tables().await?;
    Ok(Json(tables))
}
