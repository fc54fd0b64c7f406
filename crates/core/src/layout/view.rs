use std::collections::HashSet;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::day::layout_day;
use super::lanes::assign_lanes;
use super::normalize::normalize_events;
use crate::calendar::{month_weeks, CalendarDay, EventRecord, LayoutEvent};

/// One cell of a laid-out month view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: CalendarDay,
    /// Events shown in the cell, sorted by their per-day lane.
    pub visible: Vec<LayoutEvent>,
    /// Count behind the cell's "+N more" affordance.
    pub remaining: usize,
}

/// A complete laid-out month: the grid in week rows, each cell carrying
/// its visible events and overflow count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
    /// Lanes used by the global assignment pass, for renderers sizing a
    /// continuous multi-day bar area.
    pub lane_count: usize,
}

impl MonthView {
    /// Iterates the cells in grid order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }
}

/// Builds the full layout for one month in a single pass: grid, event
/// normalization, global lane assignment, then per-day overflow layout
/// for every cell.
///
/// Everything is recomputed from the inputs on each call; no state is
/// shared between invocations.
pub fn month_view(
    year: i32,
    month: u32,
    records: &[EventRecord],
    visible: &HashSet<Uuid>,
    tz: FixedOffset,
    max_lanes: usize,
) -> MonthView {
    let mut events = normalize_events(records, visible, tz);
    let lane_count = assign_lanes(&mut events);

    let (single_day, multi_day): (Vec<LayoutEvent>, Vec<LayoutEvent>) =
        events.into_iter().partition(|event| !event.is_multi_day());

    let weeks = month_weeks(year, month)
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|day| {
                    let layout = layout_day(day.date, &single_day, &multi_day, max_lanes);
                    DayCell {
                        day,
                        visible: layout.visible,
                        remaining: layout.remaining,
                    }
                })
                .collect()
        })
        .collect();

    MonthView {
        year,
        month,
        weeks,
        lane_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn cell<'a>(view: &'a MonthView, date: NaiveDate) -> &'a DayCell {
        view.days().find(|c| c.day.date == date).unwrap()
    }

    #[test]
    fn test_month_view_places_events_in_their_cells() {
        let cal = Uuid::new_v4();
        let records = vec![
            EventRecord::all_day(cal, "Kickoff", make_date(2024, 2, 5)),
            EventRecord::multi_day(cal, "Retreat", make_date(2024, 2, 7), make_date(2024, 2, 9)),
        ];
        let visible: HashSet<Uuid> = [cal].into_iter().collect();

        let view = month_view(2024, 2, &records, &visible, utc(), 3);

        assert_eq!(view.weeks.len(), 5);
        assert!(view.weeks.iter().all(|w| w.len() == 7));

        assert_eq!(cell(&view, make_date(2024, 2, 5)).visible.len(), 1);
        for day in [7, 8, 9] {
            let c = cell(&view, make_date(2024, 2, day));
            assert_eq!(c.visible.len(), 1, "Feb {}", day);
            assert_eq!(c.visible[0].event.title, "Retreat");
        }
        assert!(cell(&view, make_date(2024, 2, 6)).visible.is_empty());
    }

    #[test]
    fn test_month_view_reports_overflow() {
        let cal = Uuid::new_v4();
        let day = make_date(2024, 2, 15);
        let records: Vec<EventRecord> = (0..5)
            .map(|i| EventRecord::all_day(cal, format!("Event {}", i), day))
            .collect();
        let visible: HashSet<Uuid> = [cal].into_iter().collect();

        let view = month_view(2024, 2, &records, &visible, utc(), 3);

        let c = cell(&view, day);
        assert_eq!(c.visible.len(), 3);
        assert_eq!(c.remaining, 2);
    }

    #[test]
    fn test_month_view_includes_events_on_padding_days() {
        // Jan 28 sits in the February 2024 grid as a padding cell.
        let cal = Uuid::new_v4();
        let records = vec![EventRecord::all_day(cal, "Padding", make_date(2024, 1, 28))];
        let visible: HashSet<Uuid> = [cal].into_iter().collect();

        let view = month_view(2024, 2, &records, &visible, utc(), 3);

        let c = cell(&view, make_date(2024, 1, 28));
        assert!(!c.day.is_current_month);
        assert_eq!(c.visible.len(), 1);
    }

    #[test]
    fn test_month_view_empty_inputs() {
        let view = month_view(2024, 2, &[], &HashSet::new(), utc(), 3);

        assert_eq!(view.lane_count, 0);
        assert!(view.days().all(|c| c.visible.is_empty() && c.remaining == 0));
    }

    #[test]
    fn test_month_view_is_deterministic() {
        let cal = Uuid::new_v4();
        let records = vec![
            EventRecord::multi_day(cal, "A", make_date(2024, 2, 1), make_date(2024, 2, 10)),
            EventRecord::multi_day(cal, "B", make_date(2024, 2, 5), make_date(2024, 2, 15)),
            EventRecord::all_day(cal, "C", make_date(2024, 2, 7)),
        ];
        let visible: HashSet<Uuid> = [cal].into_iter().collect();

        let first = month_view(2024, 2, &records, &visible, utc(), 3);
        let second = month_view(2024, 2, &records, &visible, utc(), 3);
        assert_eq!(first, second);
    }
}
