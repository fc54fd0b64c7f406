use chrono::NaiveDate;

use super::heap::MinHeap;
use crate::calendar::LayoutEvent;

/// Assigns a global lane to every event so that no two events whose day
/// spans overlap share a lane, using the earliest-finish-first greedy rule
/// for interval partitioning.
///
/// Expects the slice sorted ascending by `start_date`, as produced by
/// [`normalize_events`](super::normalize_events). Lanes are dense and
/// zero-based; the pool grows only when no existing lane is free. Day
/// spans are inclusive on both ends, so a lane occupied through day X is
/// free again only for events starting on X+1 or later.
///
/// Returns the number of lanes used. O(n log n); deterministic for a
/// given input order.
pub fn assign_lanes(events: &mut [LayoutEvent]) -> usize {
    // (lane, date of the lane's last event end), offered earliest-ending
    // first, ties broken by the lower lane number.
    let mut open: MinHeap<(usize, NaiveDate), _> = MinHeap::with_capacity(
        events.len(),
        |a: &(usize, NaiveDate), b: &(usize, NaiveDate)| a.1.cmp(&b.1).then(a.0.cmp(&b.0)),
    );
    let mut lane_count = 0;

    for event in events.iter_mut() {
        let lane = match open.peek().copied() {
            Some((lane, last_end)) if event.start_date > last_end => {
                open.pop();
                lane
            }
            // The earliest-freeing lane is still occupied on the event's
            // first day, so every lane is busy: open a new one.
            _ => {
                let lane = lane_count;
                lane_count += 1;
                lane
            }
        };
        event.lane = lane;
        open.push((lane, event.end_date));
    }

    lane_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventRecord;
    use crate::layout::normalize::normalize_events;
    use chrono::{FixedOffset, NaiveDate};
    use std::collections::HashSet;
    use uuid::Uuid;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn laid_out(records: Vec<EventRecord>) -> Vec<LayoutEvent> {
        let visible: HashSet<Uuid> = records.iter().map(|r| r.calendar_id).collect();
        let mut events = normalize_events(&records, &visible, utc());
        assign_lanes(&mut events);
        events
    }

    fn lane_of(events: &[LayoutEvent], title: &str) -> usize {
        events
            .iter()
            .find(|e| e.event.title == title)
            .unwrap()
            .lane
    }

    fn overlap(a: &LayoutEvent, b: &LayoutEvent) -> bool {
        a.start_date <= b.end_date && b.start_date <= a.end_date
    }

    #[test]
    fn test_disjoint_events_share_lane_zero() {
        let cal = Uuid::new_v4();
        let events = laid_out(vec![
            EventRecord::multi_day(cal, "First", make_date(2024, 1, 1), make_date(2024, 1, 3)),
            EventRecord::multi_day(cal, "Second", make_date(2024, 1, 4), make_date(2024, 1, 6)),
            EventRecord::multi_day(cal, "Third", make_date(2024, 1, 7), make_date(2024, 1, 9)),
        ]);

        assert_eq!(lane_of(&events, "First"), 0);
        assert_eq!(lane_of(&events, "Second"), 0);
        assert_eq!(lane_of(&events, "Third"), 0);
    }

    #[test]
    fn test_overlapping_multi_day_events_get_distinct_lanes() {
        // Regression for the strict-assignment decision: two mutually
        // overlapping spans must never land in one lane.
        let cal = Uuid::new_v4();
        let events = laid_out(vec![
            EventRecord::multi_day(cal, "A", make_date(2024, 1, 1), make_date(2024, 1, 10)),
            EventRecord::multi_day(cal, "B", make_date(2024, 1, 5), make_date(2024, 1, 15)),
        ]);

        assert_ne!(lane_of(&events, "A"), lane_of(&events, "B"));
    }

    #[test]
    fn test_touching_spans_overlap_at_day_granularity() {
        // A ends on the 5th; B starts on the 5th. Both cover that day, so
        // they may not share a lane.
        let cal = Uuid::new_v4();
        let events = laid_out(vec![
            EventRecord::multi_day(cal, "A", make_date(2024, 1, 1), make_date(2024, 1, 5)),
            EventRecord::multi_day(cal, "B", make_date(2024, 1, 5), make_date(2024, 1, 8)),
        ]);

        assert_ne!(lane_of(&events, "A"), lane_of(&events, "B"));
    }

    #[test]
    fn test_freed_lane_is_reused() {
        let cal = Uuid::new_v4();
        let events = laid_out(vec![
            EventRecord::multi_day(cal, "Long", make_date(2024, 1, 1), make_date(2024, 1, 20)),
            EventRecord::multi_day(cal, "Short", make_date(2024, 1, 2), make_date(2024, 1, 3)),
            EventRecord::multi_day(cal, "After", make_date(2024, 1, 5), make_date(2024, 1, 6)),
        ]);

        assert_eq!(lane_of(&events, "Long"), 0);
        assert_eq!(lane_of(&events, "Short"), 1);
        // "Short" freed lane 1 before the 5th, so "After" reuses it
        // instead of opening lane 2.
        assert_eq!(lane_of(&events, "After"), 1);
    }

    #[test]
    fn test_lanes_are_dense_and_zero_based() {
        let cal = Uuid::new_v4();
        let day = make_date(2024, 1, 15);
        let events = laid_out(vec![
            EventRecord::all_day(cal, "A", day),
            EventRecord::all_day(cal, "B", day),
            EventRecord::all_day(cal, "C", day),
            EventRecord::all_day(cal, "D", day),
        ]);

        let mut lanes: Vec<usize> = events.iter().map(|e| e.lane).collect();
        lanes.sort_unstable();
        assert_eq!(lanes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_overlapping_pair_shares_a_lane() {
        let cal = Uuid::new_v4();
        let events = laid_out(vec![
            EventRecord::multi_day(cal, "A", make_date(2024, 1, 1), make_date(2024, 1, 7)),
            EventRecord::multi_day(cal, "B", make_date(2024, 1, 3), make_date(2024, 1, 12)),
            EventRecord::multi_day(cal, "C", make_date(2024, 1, 6), make_date(2024, 1, 9)),
            EventRecord::all_day(cal, "D", make_date(2024, 1, 8)),
            EventRecord::multi_day(cal, "E", make_date(2024, 1, 10), make_date(2024, 1, 14)),
            EventRecord::all_day(cal, "F", make_date(2024, 1, 1)),
        ]);

        for (i, a) in events.iter().enumerate() {
            for b in events.iter().skip(i + 1) {
                if overlap(a, b) {
                    assert_ne!(
                        a.lane, b.lane,
                        "{} and {} overlap but share lane {}",
                        a.event.title, b.event.title, a.lane
                    );
                }
            }
        }
    }

    #[test]
    fn test_minimal_lane_count_for_staircase() {
        // Pairwise overlaps never exceed two at once, so two lanes suffice.
        let cal = Uuid::new_v4();
        let events = laid_out(vec![
            EventRecord::multi_day(cal, "A", make_date(2024, 1, 1), make_date(2024, 1, 4)),
            EventRecord::multi_day(cal, "B", make_date(2024, 1, 3), make_date(2024, 1, 8)),
            EventRecord::multi_day(cal, "C", make_date(2024, 1, 6), make_date(2024, 1, 10)),
        ]);

        let max_lane = events.iter().map(|e| e.lane).max().unwrap();
        assert_eq!(max_lane, 1);
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let cal = Uuid::new_v4();
        let records = vec![
            EventRecord::multi_day(cal, "A", make_date(2024, 1, 1), make_date(2024, 1, 7)),
            EventRecord::multi_day(cal, "B", make_date(2024, 1, 3), make_date(2024, 1, 12)),
            EventRecord::all_day(cal, "C", make_date(2024, 1, 5)),
        ];

        let first = laid_out(records.clone());
        let second = laid_out(records);
        let first_lanes: Vec<usize> = first.iter().map(|e| e.lane).collect();
        let second_lanes: Vec<usize> = second.iter().map(|e| e.lane).collect();
        assert_eq!(first_lanes, second_lanes);
    }

    #[test]
    fn test_empty_input() {
        let mut events: Vec<LayoutEvent> = Vec::new();
        assert_eq!(assign_lanes(&mut events), 0);
    }

    #[test]
    fn test_returns_lane_count() {
        let cal = Uuid::new_v4();
        let visible: HashSet<Uuid> = [cal].into_iter().collect();
        let day = make_date(2024, 1, 15);
        let records = vec![
            EventRecord::all_day(cal, "A", day),
            EventRecord::all_day(cal, "B", day),
            EventRecord::all_day(cal, "C", make_date(2024, 1, 20)),
        ];

        let mut events = normalize_events(&records, &visible, utc());
        assert_eq!(assign_lanes(&mut events), 2);
    }
}
