use clap::Args;

use super::SourceArgs;

/// Arguments for the `month` command.
#[derive(Debug, Args)]
pub struct MonthCommand {
    /// Year to render.
    #[arg(long)]
    pub year: i32,

    /// Month to render (1-12).
    #[arg(long)]
    pub month: u32,

    /// Event rows a day cell can show before truncating to "+N more".
    #[arg(long, default_value = "3")]
    pub max_lanes: usize,

    #[command(flatten)]
    pub source: SourceArgs,
}
