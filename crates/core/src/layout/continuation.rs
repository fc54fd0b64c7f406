use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::EventKind;

/// How an event bar meets the edges of one week row.
///
/// Multi-day bars are drawn once per week row they touch; the class picks
/// the cap style that makes adjacent row segments read as one continuous
/// bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarEdge {
    /// The bar begins in this row: rounded cap on the left.
    Start,
    /// The bar ends in this row: rounded cap on the right.
    End,
    /// The bar passes through the whole row: no caps on either side.
    Through,
    /// Not a bar (timed events render as single points).
    None,
}

impl BarEdge {
    /// Returns the CSS class name for this edge style.
    pub fn css_class(&self) -> &'static str {
        match self {
            BarEdge::Start => "bar-start",
            BarEdge::End => "bar-end",
            BarEdge::Through => "bar-through",
            BarEdge::None => "",
        }
    }
}

/// Classifies how an event's bar meets the edges of the week row spanning
/// `row_start..=row_end`.
///
/// Timed events never get a bar class. A bar whose event starts within
/// the row is a [`BarEdge::Start`] (this takes precedence when the event
/// also ends within the row); one that started earlier but ends within
/// the row is an [`BarEdge::End`]; one that neither starts nor ends here
/// runs [`BarEdge::Through`].
pub fn classify_bar(
    kind: EventKind,
    event_start: NaiveDate,
    event_end: NaiveDate,
    row_start: NaiveDate,
    row_end: NaiveDate,
) -> BarEdge {
    if kind.is_timed() {
        return BarEdge::None;
    }
    if event_start >= row_start {
        return BarEdge::Start;
    }
    if event_end <= row_end {
        return BarEdge::End;
    }
    BarEdge::Through
}

/// Returns true if the bar keeps going past the right edge of this row,
/// so the renderer should draw a seam to the next week row.
pub fn continues_to_next_week(row_end: NaiveDate, event_end: NaiveDate) -> bool {
    event_end > row_end
}

/// Returns true if the bar already started before this row, so the
/// renderer should draw a seam from the previous week row.
pub fn continues_from_previous_week(row_start: NaiveDate, event_start: NaiveDate) -> bool {
    event_start < row_start
}
