use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

/// Arguments for the `seed` command.
#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Number of events to generate.
    #[arg(long, default_value = "20")]
    pub count: u32,

    /// Date to center the generated events around (default: today).
    #[arg(long)]
    pub center: Option<NaiveDate>,

    /// Calendar to attach the events to (default: a fresh random ID).
    #[arg(long)]
    pub calendar_id: Option<Uuid>,
}
