//! lanecal_core - the layout engine for the lanecal project.
//!
//! Pure functions that turn raw calendar events into lane assignments for
//! a month grid: no I/O, no shared state, recomputed from scratch on every
//! call. The `source` module defines the seam to whatever supplies the
//! raw records.

pub mod calendar;
pub mod layout;
pub mod source;
