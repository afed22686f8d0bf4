//! Clock abstraction
//!
//! The engine never reads the system clock itself; "today" is always passed
//! in. The binary edge resolves it once per invocation through this trait,
//! which keeps every status window deterministic in tests.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Supplies the current timestamp and date
pub trait Clock: Send + Sync {
    /// The current UTC timestamp
    fn now(&self) -> DateTime<Utc>;

    /// The current local calendar date; defaults to the local date of `now()`
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed date, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(
            self.0.and_hms_opt(12, 0, 0).unwrap_or_default(),
            Utc,
        )
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().date_naive(), date);
    }

    #[test]
    fn test_system_clock_dates_agree() {
        let clock = SystemClock;
        // now() and today() may straddle midnight, but both must be real dates
        let d = clock.today();
        assert!(d.and_hms_opt(0, 0, 0).is_some());
    }
}
