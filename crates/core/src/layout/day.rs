use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::LayoutEvent;

/// The lane layout of a single day cell under a fixed row capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLayout {
    /// Events that fit the capacity, sorted by their per-day lane.
    pub visible: Vec<LayoutEvent>,
    /// How many events exceeded the capacity ("+N more").
    pub remaining: usize,
}

impl DayLayout {
    /// Total number of events touching the day.
    pub fn total(&self) -> usize {
        self.visible.len() + self.remaining
    }

    /// Returns true if the day cell needs a "+N more" affordance.
    pub fn is_truncated(&self) -> bool {
        self.remaining > 0
    }
}

/// Lays out the events touching one day into at most `max_lanes` rows.
///
/// The day's own single-day events are unioned with the multi-day events
/// whose span covers the day; anything not actually touching the day is
/// ignored so the overflow count stays honest. Events are placed first-fit
/// into the lowest free lane, in `(start_date, lane)` order — the prior
/// (global) lane number stabilizes the ordering of a multi-day event
/// across every day it spans. Events beyond the capacity are counted, not
/// placed. Lane state is local to this call; nothing accumulates across
/// days.
///
/// `max_lanes == 0` means no rows are available and every event overflows.
pub fn layout_day(
    day: NaiveDate,
    single_day: &[LayoutEvent],
    multi_day: &[LayoutEvent],
    max_lanes: usize,
) -> DayLayout {
    let mut events: Vec<LayoutEvent> = multi_day
        .iter()
        .chain(single_day.iter())
        .filter(|event| event.covers(day))
        .cloned()
        .collect();

    events.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then(a.lane.cmp(&b.lane))
    });

    let mut used = vec![false; max_lanes];
    let mut visible = Vec::new();
    let mut remaining = 0;

    for mut event in events {
        match used.iter().position(|&taken| !taken) {
            Some(lane) => {
                used[lane] = true;
                event.lane = lane;
                visible.push(event);
            }
            None => remaining += 1,
        }
    }

    // First-fit over a per-call lane set hands out 0, 1, 2, ... in order,
    // so `visible` is already sorted by lane.
    DayLayout { visible, remaining }
}
