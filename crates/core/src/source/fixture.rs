use std::collections::HashSet;

use async_trait::async_trait;
use chrono::FixedOffset;
use uuid::Uuid;

use crate::calendar::EventRecord;

use super::{DateRange, EventSource, Result, SourceError};

/// An in-memory event source backed by a fixed set of records.
///
/// Used for demos, tests, and fixture files; it answers queries the same
/// way a remote source would, filtering by range overlap and calendar
/// membership.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    events: Vec<EventRecord>,
    /// Zone used to date records when matching against a query range.
    tz: FixedOffset,
}

impl FixtureSource {
    /// Creates a source over the given records, dating them in UTC.
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self {
            events,
            tz: FixedOffset::east_opt(0).expect("zero offset is valid"),
        }
    }

    /// Sets the zone used for day-granularity range matching.
    pub fn with_timezone(mut self, tz: FixedOffset) -> Self {
        self.tz = tz;
        self
    }

    /// Parses a source from a JSON array of event records.
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<EventRecord> =
            serde_json::from_str(json).map_err(|err| SourceError::Parse(err.to_string()))?;
        Ok(Self::new(events))
    }

    /// Number of records held by the source.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The set of calendars that have at least one record.
    pub fn calendar_ids(&self) -> HashSet<Uuid> {
        self.events.iter().map(|event| event.calendar_id).collect()
    }

    /// Returns true if the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[async_trait]
impl EventSource for FixtureSource {
    async fn fetch_events(
        &self,
        range: DateRange,
        calendars: &HashSet<Uuid>,
    ) -> Result<Vec<EventRecord>> {
        let events = self
            .events
            .iter()
            .filter(|event| calendars.contains(&event.calendar_id))
            .filter(|event| {
                let start = event.start.with_timezone(&self.tz).date_naive();
                let end = event.end.with_timezone(&self.tz).date_naive();
                // Reversed records still match on their start day.
                range.overlaps(start, end.max(start))
            })
            .cloned()
            .collect();
        Ok(events)
    }
}
