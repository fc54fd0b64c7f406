use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::calendar::EventRecord;

use super::{DateRange, Result};

/// Supplier of raw event records for a date range.
///
/// The layout engine consumes whatever a source returns; sources own the
/// records and the engine never mutates them.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches the events overlapping the range for the given calendars.
    async fn fetch_events(
        &self,
        range: DateRange,
        calendars: &HashSet<Uuid>,
    ) -> Result<Vec<EventRecord>>;
}
