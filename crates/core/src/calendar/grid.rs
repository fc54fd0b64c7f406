use chrono::{Datelike, Duration, NaiveDate};

use super::types::CalendarDay;

/// Builds the display grid for a month: every day from the Sunday on or
/// before the first of the month through the Saturday on or after the last,
/// so the result is always a whole number of 7-day rows.
///
/// `month` is 1-based, as in chrono. An invalid year/month combination
/// yields an empty grid rather than panicking.
///
/// ```
/// use lanecal_core::calendar::month_grid;
///
/// let grid = month_grid(2024, 2);
/// assert_eq!(grid.len(), 35); // 5 full weeks around February 2024
/// assert_eq!(grid[0].date_key(), "20240128");
/// assert_eq!(grid[34].date_key(), "20240302");
/// ```
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(last) = last_of_month(year, month) else {
        return Vec::new();
    };

    let grid_start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let grid_end = last + Duration::days((6 - last.weekday().num_days_from_sunday()) as i64);

    let mut days = Vec::with_capacity(42);
    let mut current = grid_start;
    while current <= grid_end {
        days.push(CalendarDay::new(current, current.month() == month));
        current += Duration::days(1);
    }

    days
}

/// Builds the month grid chunked into week rows, for renderers that draw
/// one row at a time.
pub fn month_weeks(year: i32, month: u32) -> Vec<Vec<CalendarDay>> {
    month_grid(year, month)
        .chunks(7)
        .map(|week| week.to_vec())
        .collect()
}

fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt())
}
