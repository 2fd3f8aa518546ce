//! Data models for StudyHall

pub mod book;
pub mod borrow_request;
pub mod enums;
pub mod reservation;
pub mod table;
pub mod time_slot;
pub mod user;

// Re-export commonly used types
pub use book::Book;
pub use borrow_request::BorrowRequest;
pub use enums::{AvailabilityStatus, BorrowRequestStatus, ReservationStatus, Role};
pub use reservation::Reservation;
pub use table::StudyTable;
pub use time_slot::TimeSlot;
pub use user::UserClaims;
