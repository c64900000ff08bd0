//! Rental model and date-range arithmetic

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Inclusive calendar date range of a rental.
///
/// Both endpoints are billed days, so two ranges that merely touch (one
/// ending the day the other starts) overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range; the end date must be strictly after the start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    /// Inclusive interval-overlap test: `s <= E && e >= S`.
    pub fn overlaps(self, other: DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Number of billed days, counting both the start and end day.
    pub fn days(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Rental database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Rental {
    pub id: Uuid,
    pub car_id: Uuid,
    pub client_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rental {
    /// Check whether the given user is the client that booked this rental
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.client_id == user_id
    }

    /// The booked period as a date range
    pub fn period(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn test_range_requires_end_after_start() {
        assert!(DateRange::new(date("2025-09-01"), date("2025-09-05")).is_some());
        assert!(DateRange::new(date("2025-09-05"), date("2025-09-05")).is_none());
        assert!(DateRange::new(date("2025-09-05"), date("2025-09-01")).is_none());
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        let existing = range("2025-09-01", "2025-09-05");
        assert!(!existing.overlaps(range("2025-09-06", "2025-09-10")));
        assert!(!existing.overlaps(range("2025-08-20", "2025-08-31")));
    }

    #[test]
    fn test_touching_endpoints_overlap() {
        // A rental ending on day X conflicts with one starting on day X
        let existing = range("2025-09-01", "2025-09-05");
        assert!(existing.overlaps(range("2025-09-05", "2025-09-10")));
        assert!(existing.overlaps(range("2025-08-28", "2025-09-01")));
    }

    #[test]
    fn test_containment_overlaps() {
        let existing = range("2025-09-01", "2025-09-10");
        assert!(existing.overlaps(range("2025-09-03", "2025-09-04")));
        // And the reverse: proposed fully contains the existing range
        assert!(range("2025-09-03", "2025-09-04").overlaps(existing));
    }

    #[test]
    fn test_partial_overlap() {
        let existing = range("2025-09-01", "2025-09-05");
        assert!(existing.overlaps(range("2025-09-04", "2025-09-08")));
        assert!(existing.overlaps(range("2025-08-28", "2025-09-02")));
    }

    #[test]
    fn test_billed_days_are_inclusive() {
        // A 1-day-apart rental spans 2 billed days
        assert_eq!(range("2025-09-01", "2025-09-02").days(), 2);
        assert_eq!(range("2025-09-01", "2025-09-05").days(), 5);
    }
}
