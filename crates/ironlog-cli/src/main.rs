//! ironlog CLI application
//!
//! Command-line interface and MCP server for the ironlog workout tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use ironlog_core::{params::WeekOf, TrackerBuilder};
use log::info;
use mcp::{run_stdio_server, IronlogMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        cardio_target,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_user(user)
        .with_weekly_cardio_minutes(cardio_target)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("ironlog started for user '{}'", tracker.user());

    let cli = |tracker| Cli::new(tracker, TerminalRenderer::new(!no_color));

    match command {
        Some(Exercise { command }) => cli(tracker).handle_exercise_command(command).await,
        Some(Plan { command }) => cli(tracker).handle_plan_command(command).await,
        Some(Log { command }) => cli(tracker).handle_log_command(command).await,
        Some(Day { command }) => cli(tracker).handle_day_command(command).await,
        Some(Progress(args)) => cli(tracker).show_progress(&args.into()).await,
        Some(Cardio(args)) => cli(tracker).show_cardio(&args.into()).await,
        Some(Seed) => cli(tracker).seed().await,
        Some(Serve) => {
            info!("Starting ironlog MCP server");
            run_stdio_server(IronlogMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => cli(tracker).show_progress(&WeekOf::default()).await,
    }
}
