//! Injected time source
//!
//! Past-date validation must be deterministic under test, so services take a
//! `Clock` instead of calling `Utc::now()` directly.

use chrono::{DateTime, NaiveDate, Utc};

/// Provider of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of the current instant
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub mod fixed {
    use super::*;

    /// Clock pinned to a fixed instant for tests
    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn at(rfc3339: &str) -> Self {
            Self(
                DateTime::parse_from_rfc3339(rfc3339)
                    .expect("valid RFC 3339 timestamp")
                    .with_timezone(&Utc),
            )
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fixed::FixedClock, Clock};

    #[test]
    fn today_is_derived_from_now() {
        let clock = FixedClock::at("2024-01-15T23:30:00Z");
        assert_eq!(clock.today().to_string(), "2024-01-15");
    }
}
