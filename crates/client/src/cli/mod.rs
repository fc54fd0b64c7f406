//! CLI command definitions.

pub mod day;
pub mod month;
pub mod seed;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

/// CLI viewer for the lanecal layout engine.
#[derive(Debug, Parser)]
#[command(name = "lanecal")]
#[command(about = "Render calendar lane layouts in the terminal", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the lane layout for a whole month.
    Month(month::MonthCommand),
    /// Render the lane layout for a single day.
    Day(day::DayCommand),
    /// Generate a fixture file of seed events.
    Seed(seed::SeedCommand),
}

/// Where the event records come from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Path to a JSON fixture of event records.
    #[arg(long, env = "LANECAL_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Number of seed events to generate when no fixture is given.
    #[arg(long, default_value = "24")]
    pub seed: u32,

    /// Restrict the view to these calendar IDs (default: every calendar
    /// present in the source).
    #[arg(long = "calendar")]
    pub calendars: Vec<Uuid>,

    /// Display zone offset from UTC, in hours.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub tz_offset_hours: i32,
}
