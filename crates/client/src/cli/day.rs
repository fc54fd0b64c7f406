use chrono::NaiveDate;
use clap::Args;

use super::SourceArgs;

/// Arguments for the `day` command.
#[derive(Debug, Args)]
pub struct DayCommand {
    /// Day to render, in YYYY-MM-DD form.
    #[arg(long)]
    pub date: NaiveDate,

    /// Event rows the day cell can show before truncating to "+N more".
    #[arg(long, default_value = "3")]
    pub max_lanes: usize,

    #[command(flatten)]
    pub source: SourceArgs,
}
