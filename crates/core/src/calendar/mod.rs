mod error;
mod grid;
mod mock_data;
mod types;

pub use error::{validate_record, EventError};
pub use grid::{month_grid, month_weeks};
pub use mock_data::generate_seed_events;
pub use types::{CalendarDay, EventKind, EventRecord, LayoutEvent};
