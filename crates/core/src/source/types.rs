use chrono::{Datelike, NaiveDate};

use super::DateRangeError;

/// A date range with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for an entire month.
    ///
    /// # Panics
    /// Panics if the year/month combination is invalid.
    pub fn month(year: i32, month: u32) -> Self {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .expect("Invalid year/month for DateRange::month");

        // Get the last day of the month by going to the first of next month and subtracting a day
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .expect("Invalid year/month for DateRange::month end calculation")
        .pred_opt()
        .expect("Failed to get last day of month");

        Self { start, end }
    }

    /// Creates a date range for the display week containing the given date.
    ///
    /// Display weeks start on Sunday and end on Saturday, matching the
    /// month grid.
    pub fn week(date: NaiveDate) -> Self {
        let days_from_sunday = date.weekday().num_days_from_sunday();
        let start = date - chrono::Duration::days(days_from_sunday as i64);

        // Saturday is 6 days after Sunday
        let end = start + chrono::Duration::days(6);

        Self { start, end }
    }

    /// Returns true if the range covers the given day.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Returns true if the given span overlaps this range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && end >= self.start
    }
}
