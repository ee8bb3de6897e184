//! Time source abstraction
//!
//! Year/month defaults come from a `Clock` rather than wall-clock calls in
//! the generators, so tests can pin the date.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed date, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(clock.today().year(), 2025);
        assert_eq!(clock.today().month(), 3);
    }
}
