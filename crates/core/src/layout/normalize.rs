use std::collections::HashSet;

use chrono::FixedOffset;
use uuid::Uuid;

use crate::calendar::{EventKind, EventRecord, LayoutEvent};

/// Converts raw records into layout-ready events.
///
/// Records are filtered to the visible calendar set, dated at calendar-day
/// granularity in the fixed display zone, and sorted ascending by start
/// date (the sort is stable, so arrival order breaks ties). Malformed
/// input degrades instead of failing: a reversed range is clamped to a
/// single-day span.
pub fn normalize_events(
    records: &[EventRecord],
    visible: &HashSet<Uuid>,
    tz: FixedOffset,
) -> Vec<LayoutEvent> {
    let mut events: Vec<LayoutEvent> = records
        .iter()
        .filter(|record| visible.contains(&record.calendar_id))
        .map(|record| normalize_record(record, tz))
        .collect();

    events.sort_by_key(|event| event.start_date);
    events
}

/// Derives a single [`LayoutEvent`] from a record.
///
/// The lane is left at zero; an assigner pass populates it.
pub fn normalize_record(record: &EventRecord, tz: FixedOffset) -> LayoutEvent {
    let start_date = record.start.with_timezone(&tz).date_naive();
    let end_date = match record.kind {
        EventKind::MultiDay => {
            let end = record.end.with_timezone(&tz).date_naive();
            // Reversed ranges clamp to a single day rather than erroring.
            if end < start_date {
                start_date
            } else {
                end
            }
        }
        EventKind::AllDay | EventKind::Timed => start_date,
    };

    let (display_text, time_label) = match record.kind {
        EventKind::Timed => {
            let label = record.start.with_timezone(&tz).format("%H:%M").to_string();
            (format!("({}) {}", label, record.title), Some(label))
        }
        EventKind::AllDay | EventKind::MultiDay => (record.title.clone(), None),
    };

    LayoutEvent {
        event: record.clone(),
        start_date,
        end_date,
        lane: 0,
        display_text,
        time_label,
    }
}
