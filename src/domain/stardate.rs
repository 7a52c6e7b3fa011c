//! Stardate derivation
//!
//! A stardate is the string `<year>.<day-of-year>`, so 2024-01-01 is
//! `2024.1` and the last day of a leap year is `2024.366`.

use chrono::{Datelike, NaiveDate};

/// Returns the stardate string for a calendar date
pub fn stardate(date: NaiveDate) -> String {
    format!("{}.{}", date.year(), date.ordinal())
}
