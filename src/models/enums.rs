//! Shared domain enums
//!
//! Statuses travel as SCREAMING_SNAKE_CASE strings on the wire and are stored
//! as smallint codes in the database.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ReservationStatus
// ---------------------------------------------------------------------------

/// Seat reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum ReservationStatus {
    Pending = 0,
    Approved = 1,
    Denied = 2,
    Waitlisted = 3,
}

impl ReservationStatus {
    /// Whether this status counts toward seat conflict detection.
    /// DENIED and WAITLISTED records never block a candidate.
    pub fn is_blocking(self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Approved)
    }

    /// Everything except PENDING is terminal
    pub fn is_terminal(self) -> bool {
        !matches!(self, ReservationStatus::Pending)
    }

    /// Parse an administrator decision. PENDING is not a valid decision
    /// target, and unknown strings are rejected outright.
    pub fn parse_decision(raw: &str) -> Option<Self> {
        match raw {
            "APPROVED" => Some(ReservationStatus::Approved),
            "DENIED" => Some(ReservationStatus::Denied),
            "WAITLISTED" => Some(ReservationStatus::Waitlisted),
            _ => None,
        }
    }
}

impl From<i16> for ReservationStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => ReservationStatus::Approved,
            2 => ReservationStatus::Denied,
            3 => ReservationStatus::Waitlisted,
            _ => ReservationStatus::Pending,
        }
    }
}

impl From<ReservationStatus> for i16 {
    fn from(s: ReservationStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Approved => "APPROVED",
            ReservationStatus::Denied => "DENIED",
            ReservationStatus::Waitlisted => "WAITLISTED",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BorrowRequestStatus
// ---------------------------------------------------------------------------

/// Borrow request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum BorrowRequestStatus {
    Pending = 0,
    Approved = 1,
    Denied = 2,
}

impl BorrowRequestStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BorrowRequestStatus::Pending)
    }

    /// Parse an administrator decision (PENDING excluded)
    pub fn parse_decision(raw: &str) -> Option<Self> {
        match raw {
            "APPROVED" => Some(BorrowRequestStatus::Approved),
            "DENIED" => Some(BorrowRequestStatus::Denied),
            _ => None,
        }
    }
}

impl From<i16> for BorrowRequestStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => BorrowRequestStatus::Approved,
            2 => BorrowRequestStatus::Denied,
            _ => BorrowRequestStatus::Pending,
        }
    }
}

impl From<BorrowRequestStatus> for i16 {
    fn from(s: BorrowRequestStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for BorrowRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BorrowRequestStatus::Pending => "PENDING",
            BorrowRequestStatus::Approved => "APPROVED",
            BorrowRequestStatus::Denied => "DENIED",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AvailabilityStatus
// ---------------------------------------------------------------------------

/// Book availability
///
/// MAINTENANCE is an administrator override outside the lifecycle scope.
/// Nothing in this core transitions a book back to AVAILABLE (no return
/// processing exists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum AvailabilityStatus {
    Available = 0,
    Borrowed = 1,
    Reserved = 2,
    Maintenance = 3,
}

impl From<i16> for AvailabilityStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => AvailabilityStatus::Borrowed,
            2 => AvailabilityStatus::Reserved,
            3 => AvailabilityStatus::Maintenance,
            _ => AvailabilityStatus::Available,
        }
    }
}

impl From<AvailabilityStatus> for i16 {
    fn from(s: AvailabilityStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AvailabilityStatus::Available => "AVAILABLE",
            AvailabilityStatus::Borrowed => "BORROWED",
            AvailabilityStatus::Reserved => "RESERVED",
            AvailabilityStatus::Maintenance => "MAINTENANCE",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role carried in JWT claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_decision_rejects_pending_and_unknown() {
        assert_eq!(
            ReservationStatus::parse_decision("APPROVED"),
            Some(ReservationStatus::Approved)
        );
        assert_eq!(
            ReservationStatus::parse_decision("WAITLISTED"),
            Some(ReservationStatus::Waitlisted)
        );
        assert_eq!(ReservationStatus::parse_decision("PENDING"), None);
        assert_eq!(ReservationStatus::parse_decision("CANCELLED"), None);
        assert_eq!(ReservationStatus::parse_decision("approved"), None);
    }

    #[test]
    fn borrow_decision_rejects_waitlisted() {
        assert_eq!(
            BorrowRequestStatus::parse_decision("DENIED"),
            Some(BorrowRequestStatus::Denied)
        );
        assert_eq!(BorrowRequestStatus::parse_decision("WAITLISTED"), None);
        assert_eq!(BorrowRequestStatus::parse_decision("PENDING"), None);
    }

    #[test]
    fn blocking_states() {
        assert!(ReservationStatus::Pending.is_blocking());
        assert!(ReservationStatus::Approved.is_blocking());
        assert!(!ReservationStatus::Denied.is_blocking());
        assert!(!ReservationStatus::Waitlisted.is_blocking());
    }

    #[test]
    fn smallint_round_trip() {
        for s in [
            ReservationStatus::Pending,
            ReservationStatus::Approved,
            ReservationStatus::Denied,
            ReservationStatus::Waitlisted,
        ] {
            assert_eq!(ReservationStatus::from(i16::from(s)), s);
        }
    }
}
