mod error;
mod fixture;
mod traits;
mod types;

pub use error::{DateRangeError, Result, SourceError};
pub use fixture::FixtureSource;
pub use traits::EventSource;
pub use types::DateRange;
