use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ironlog_core::progress::DEFAULT_WEEKLY_CARDIO_MINUTES;

use crate::cli::{DayCommands, ExerciseCommands, LogCommands, PlanCommands, WeekArgs};

/// Weekly workout planner and training log
///
/// ironlog keeps an exercise catalog, a plan per weekday, every logged set
/// and cardio session, and a daily habit log. It reports how much of the
/// planned week has been done, per muscle group and for cardio minutes. It
/// can also run as an MCP (Model Context Protocol) server so AI assistants
/// can read and update the same data.
#[derive(Parser)]
#[command(version, about, name = "ironlog")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/ironlog/ironlog.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// User whose data is read and written
    #[arg(long, global = true, env = "IRONLOG_USER", default_value = "local")]
    pub user: String,

    /// Weekly cardio target in minutes, used when the plan has no cardio
    /// entries
    #[arg(
        long,
        global = true,
        env = "IRONLOG_CARDIO_TARGET",
        default_value_t = DEFAULT_WEEKLY_CARDIO_MINUTES
    )]
    pub cardio_target: u32,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the ironlog CLI
///
/// Without a command, this week's progress is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the exercise catalog
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Manage the weekly plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Log sets and cardio sessions
    #[command(alias = "l")]
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
    /// Show or save the daily habit log
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Show planned versus executed work for a week
    Progress(WeekArgs),
    /// Show the cardio sessions of a week
    Cardio(WeekArgs),
    /// Fill an empty account with demo data
    Seed,
    /// Start the MCP server
    Serve,
}
