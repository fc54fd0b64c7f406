//! lanecal_client - CLI viewer for the lanecal layout engine.

pub mod cli;
pub mod error;
pub mod output;

pub use error::{ClientError, Result};
