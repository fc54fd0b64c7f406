//! lanecal CLI entry point.

use std::collections::HashSet;

use anyhow::Result;
use chrono::{FixedOffset, NaiveDate, Utc};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use lanecal_core::calendar::{generate_seed_events, month_grid};
use lanecal_core::layout::{assign_lanes, layout_day, month_view, normalize_events};
use lanecal_core::source::{DateRange, EventSource, FixtureSource};

use lanecal_client::cli::{Cli, Commands, OutputFormat, SourceArgs};
use lanecal_client::output::{format_output, pretty};
use lanecal_client::ClientError;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lanecal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Month(cmd) => {
            let tz = display_zone(cmd.source.tz_offset_hours)?;
            let center = NaiveDate::from_ymd_opt(cmd.year, cmd.month, 15).ok_or_else(|| {
                ClientError::InvalidInput(format!("invalid month: {}-{}", cmd.year, cmd.month))
            })?;
            let source = load_source(&cmd.source, center)?;
            let calendars = visible_calendars(&cmd.source, &source);
            let range =
                grid_range(cmd.year, cmd.month).unwrap_or_else(|| DateRange::month(cmd.year, cmd.month));
            let records = source.fetch_events(range, &calendars).await?;
            tracing::debug!(count = records.len(), "Fetched events for month view");

            let view = month_view(cmd.year, cmd.month, &records, &calendars, tz, cmd.max_lanes);
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&view, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_month_view(&view)),
            }
        }
        Commands::Day(cmd) => {
            let tz = display_zone(cmd.source.tz_offset_hours)?;
            let source = load_source(&cmd.source, cmd.date)?;
            let calendars = visible_calendars(&cmd.source, &source);
            let range = DateRange::new(cmd.date, cmd.date).expect("single-day range is valid");
            let records = source.fetch_events(range, &calendars).await?;
            tracing::debug!(count = records.len(), date = %cmd.date, "Fetched events for day view");

            let mut events = normalize_events(&records, &calendars, tz);
            assign_lanes(&mut events);
            let (single_day, multi_day): (Vec<_>, Vec<_>) =
                events.into_iter().partition(|e| !e.is_multi_day());

            let layout = layout_day(cmd.date, &single_day, &multi_day, cmd.max_lanes);
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&layout, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_day_layout(cmd.date, &layout)),
            }
        }
        Commands::Seed(cmd) => {
            let calendar_id = cmd.calendar_id.unwrap_or_else(Uuid::new_v4);
            let center = cmd.center.unwrap_or_else(|| Utc::now().date_naive());
            let events = generate_seed_events(calendar_id, center, cmd.count);

            println!("{}", serde_json::to_string_pretty(&events)?);
            if !cli.quiet {
                eprintln!("Generated {} events on calendar {}", events.len(), calendar_id);
            }
        }
    }

    Ok(())
}

/// Build the fixed display zone from an hour offset.
fn display_zone(hours: i32) -> lanecal_client::Result<FixedOffset> {
    FixedOffset::east_opt(hours * 3600)
        .ok_or_else(|| ClientError::InvalidInput(format!("invalid zone offset: {}h", hours)))
}

/// Load the event source: a fixture file if one was given, generated seed
/// events otherwise.
fn load_source(args: &SourceArgs, center: NaiveDate) -> lanecal_client::Result<FixtureSource> {
    match &args.fixture {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let source = FixtureSource::from_json(&json)?;
            tracing::info!(path = %path.display(), count = source.len(), "Loaded fixture");
            Ok(source)
        }
        None => {
            let calendar_id = Uuid::new_v4();
            tracing::info!(count = args.seed, %calendar_id, "Generating seed events");
            Ok(FixtureSource::new(generate_seed_events(
                calendar_id,
                center,
                args.seed,
            )))
        }
    }
}

/// The calendars to show: the user's selection, or everything the source
/// holds.
fn visible_calendars(args: &SourceArgs, source: &FixtureSource) -> HashSet<Uuid> {
    if args.calendars.is_empty() {
        source.calendar_ids()
    } else {
        args.calendars.iter().copied().collect()
    }
}

/// The date range covered by a month's display grid, padding included.
fn grid_range(year: i32, month: u32) -> Option<DateRange> {
    let grid = month_grid(year, month);
    let first = grid.first()?.date;
    let last = grid.last()?.date;
    DateRange::new(first, last).ok()
}
