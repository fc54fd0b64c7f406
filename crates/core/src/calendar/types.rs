use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// The kind of calendar event, determining its dating and display behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An event spanning multiple days.
    MultiDay,
    /// An all-day event (no specific time).
    AllDay,
    /// An event anchored to a clock time.
    Timed,
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "multi_day" => EventKind::MultiDay,
            "timed" => EventKind::Timed,
            // Unknown kinds degrade to all-day: single-day span, no time label.
            _ => EventKind::AllDay,
        })
    }
}

impl EventKind {
    /// Returns the sort priority for this event kind.
    /// Lower values appear first in the hierarchy.
    pub fn sort_priority(&self) -> u8 {
        match self {
            EventKind::MultiDay => 0,
            EventKind::AllDay => 1,
            EventKind::Timed => 2,
        }
    }

    /// Returns true if this is a multi-day event.
    pub fn is_multi_day(&self) -> bool {
        matches!(self, EventKind::MultiDay)
    }

    /// Returns true if this is an all-day event.
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventKind::AllDay)
    }

    /// Returns true if this is a timed event.
    pub fn is_timed(&self) -> bool {
        matches!(self, EventKind::Timed)
    }

    /// Returns the CSS class name for this event kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            EventKind::MultiDay => "multi-day",
            EventKind::AllDay => "all-day",
            EventKind::Timed => "timed",
        }
    }
}

/// A raw calendar event as supplied by the data source.
///
/// Records are owned by the source and never mutated by the layout engine;
/// every layout pass derives fresh [`LayoutEvent`] views from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    /// The calendar this event belongs to. Doubles as the visibility
    /// filter key for layout passes.
    pub calendar_id: Uuid,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: EventKind,
    /// Optional accent color for the event tile (CSS color value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EventRecord {
    /// Creates a new timed event.
    pub fn timed(
        calendar_id: Uuid,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            calendar_id,
            title: title.into(),
            start,
            end,
            kind: EventKind::Timed,
            color: None,
        }
    }

    /// Creates a new all-day event on the given date.
    pub fn all_day(calendar_id: Uuid, title: impl Into<String>, date: NaiveDate) -> Self {
        let instant = day_start(date);
        Self {
            id: Uuid::new_v4(),
            calendar_id,
            title: title.into(),
            start: instant,
            end: instant,
            kind: EventKind::AllDay,
            color: None,
        }
    }

    /// Creates a new multi-day event spanning the given dates.
    pub fn multi_day(
        calendar_id: Uuid,
        title: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            calendar_id,
            title: title.into(),
            start: day_start(start),
            end: day_start(end),
            kind: EventKind::MultiDay,
            color: None,
        }
    }

    /// Sets the accent color for this event.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// A single cell of the month display grid.
///
/// Immutable; rebuilt from scratch on every grid build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// True iff this cell belongs to the month the grid was built for,
    /// rather than the padding days of the adjacent months.
    pub is_current_month: bool,
}

impl CalendarDay {
    /// Creates a new grid cell.
    pub fn new(date: NaiveDate, is_current_month: bool) -> Self {
        Self {
            date,
            is_current_month,
        }
    }

    /// The day-of-month number shown in the cell.
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// Canonical day-granularity key, e.g. "20240215".
    pub fn date_key(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}

/// A layout-ready view of an [`EventRecord`].
///
/// Dates are truncated to calendar-day granularity in the display zone.
/// `lane` is populated by an assigner pass; several `LayoutEvent`s may be
/// derived from the same record (once globally, once per affected day) and
/// carry independent lane values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEvent {
    pub event: EventRecord,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Horizontal display row, dense and zero-based within the pass that
    /// assigned it.
    pub lane: usize,
    /// Text rendered on the event tile, including the leading time label
    /// for timed events.
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
}

impl LayoutEvent {
    /// Returns true if this event spans multiple days.
    pub fn is_multi_day(&self) -> bool {
        self.event.kind.is_multi_day()
    }

    /// Returns true if this event's span covers the given day.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Canonical key of the first day of the span.
    pub fn start_key(&self) -> String {
        self.start_date.format("%Y%m%d").to_string()
    }

    /// Canonical key of the last day of the span.
    pub fn end_key(&self) -> String {
        self.end_date.format("%Y%m%d").to_string()
    }
}
