//! StudyHall Library Administration Server
//!
//! A Rust implementation of the StudyHall library administration platform,
//! providing a REST JSON API for the book catalog, borrow requests, and
//! study-table seat reservations.

use std::sync::Arc;

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
