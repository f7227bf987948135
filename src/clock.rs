//! Time source abstraction.
//!
//! The export header and the default output filename both carry "today's"
//! date. Reading the wall clock is routed through [`Clock`] so callers (and
//! tests) decide what "today" means.

use chrono::{NaiveDate, Utc};

/// Something that can tell the current calendar date.
pub trait Clock {
    /// The current date as an ISO calendar date (no time component).
    fn today(&self) -> NaiveDate;
}

/// Wall clock. Dates are taken in UTC so the header matches an ISO-8601
/// timestamp cut at the `T`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock frozen on a single date.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
