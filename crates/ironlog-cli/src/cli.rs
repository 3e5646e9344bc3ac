//! Subcommand definitions and their handlers
//!
//! Every subcommand has a clap wrapper that converts into the matching core
//! parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! The core types carry no clap attributes, so the MCP server can reuse them
//! unchanged. Business validation stays in the core; clap only handles
//! parsing, ranges and help text.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use ironlog_core::{params::*, ExecutionType, FoodIntake, Tracker, WorkoutKind};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Value enums
// ============================================================================

/// Kind of training prescribed by a plan entry
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Sets of reps at a weight
    Strength,
    /// Sets of reps without external load
    Bodyweight,
    /// Sets held for a duration
    Timed,
    /// Minutes per week
    Cardio,
}

impl From<KindArg> for WorkoutKind {
    fn from(val: KindArg) -> Self {
        match val {
            KindArg::Strength => WorkoutKind::Strength,
            KindArg::Bodyweight => WorkoutKind::Bodyweight,
            KindArg::Timed => WorkoutKind::Timed,
            KindArg::Cardio => WorkoutKind::Cardio,
        }
    }
}

/// How an exercise is performed and logged
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExecutionTypeArg {
    Load,
    Bodyweight,
    Timed,
    Cardio,
}

impl From<ExecutionTypeArg> for ExecutionType {
    fn from(val: ExecutionTypeArg) -> Self {
        match val {
            ExecutionTypeArg::Load => ExecutionType::Load,
            ExecutionTypeArg::Bodyweight => ExecutionType::Bodyweight,
            ExecutionTypeArg::Timed => ExecutionType::Timed,
            ExecutionTypeArg::Cardio => ExecutionType::Cardio,
        }
    }
}

/// Diet adherence for a day
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FoodIntakeArg {
    WithinDiet,
    SlightlyOver,
    Over,
    OffDiet,
}

impl From<FoodIntakeArg> for FoodIntake {
    fn from(val: FoodIntakeArg) -> Self {
        match val {
            FoodIntakeArg::WithinDiet => FoodIntake::WithinDiet,
            FoodIntakeArg::SlightlyOver => FoodIntake::SlightlyOver,
            FoodIntakeArg::Over => FoodIntake::Over,
            FoodIntakeArg::OffDiet => FoodIntake::OffDiet,
        }
    }
}

// ============================================================================
// Exercise commands
// ============================================================================

/// Add an exercise to your catalog
#[derive(Args)]
pub struct AddExerciseArgs {
    /// Name of the exercise
    pub name: String,
    /// Muscle group the exercise trains
    #[arg(short = 'g', long = "group")]
    pub muscle_group: String,
    /// How the exercise is performed
    #[arg(short = 't', long = "type", value_enum, default_value_t = ExecutionTypeArg::Load)]
    pub execution_type: ExecutionTypeArg,
}

impl From<AddExerciseArgs> for CreateExercise {
    fn from(val: AddExerciseArgs) -> Self {
        CreateExercise {
            name: val.name,
            muscle_group: val.muscle_group,
            execution_type: val.execution_type.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// Add an exercise to your catalog
    #[command(alias = "a")]
    Add(AddExerciseArgs),
    /// List your exercises and the global catalog
    #[command(aliases = ["l", "ls"])]
    List,
}

// ============================================================================
// Plan commands
// ============================================================================

/// Append an exercise to the plan of one weekday
///
/// The exercise is looked up by name among your exercises (or by
/// --exercise-id) and created when missing. Which targets are required
/// depends on --kind: strength and bodyweight need --sets, --reps and
/// --rest; timed needs --sets, --duration and --rest; cardio needs
/// --weekly-minutes.
#[derive(Args)]
pub struct AddPlanEntryArgs {
    #[arg(
        help = "Day of the week, 0 = Sunday through 6 = Saturday",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub week_day: u8,
    /// Exercise name
    pub exercise: String,
    /// Muscle group, used when the exercise has to be created
    #[arg(short = 'g', long = "group")]
    pub muscle_group: String,
    /// Kind of training prescribed
    #[arg(short, long, value_enum, default_value_t = KindArg::Strength)]
    pub kind: KindArg,
    /// Use this existing exercise instead of looking it up by name
    #[arg(long)]
    pub exercise_id: Option<u64>,
    /// Rename the day's plan
    #[arg(long)]
    pub plan_name: Option<String>,
    #[arg(short, long, help = "Target number of sets")]
    pub sets: Option<u32>,
    #[arg(short, long, help = "Target repetitions per set")]
    pub reps: Option<u32>,
    #[arg(short, long, help = "Target weight in kilograms")]
    pub weight: Option<f64>,
    #[arg(short, long, help = "Target seconds per set")]
    pub duration: Option<u32>,
    #[arg(long, help = "Rest between sets in seconds")]
    pub rest: Option<u32>,
    #[arg(long, help = "Weekly cardio target in minutes")]
    pub weekly_minutes: Option<u32>,
}

impl From<AddPlanEntryArgs> for AddPlanEntry {
    fn from(val: AddPlanEntryArgs) -> Self {
        AddPlanEntry {
            week_day: val.week_day,
            plan_name: val.plan_name,
            exercise_id: val.exercise_id,
            exercise_name: val.exercise,
            muscle_group: val.muscle_group,
            kind: val.kind.into(),
            sets: val.sets,
            reps: val.reps,
            weight: val.weight,
            duration_sec: val.duration,
            rest_seconds: val.rest,
            weekly_minutes: val.weekly_minutes,
        }
    }
}

/// Show the weekly plan, or one day of it
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(
        help = "Day of the week, 0 = Sunday through 6 = Saturday; the whole week when omitted",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub week_day: Option<u8>,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Append an exercise to the plan of one weekday
    #[command(alias = "a")]
    Add(AddPlanEntryArgs),
    /// Show the weekly plan, or one day of it
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Show today's plan
    #[command(alias = "t")]
    Today,
}

// ============================================================================
// Log commands
// ============================================================================

/// Record one completed set or session of an exercise
#[derive(Args)]
pub struct LogSetArgs {
    #[arg(help = "ID of the exercise performed")]
    pub exercise_id: u64,
    /// Plan entry this set fulfils
    #[arg(short = 'e', long = "entry")]
    pub plan_entry_id: Option<u64>,
    /// How the set was performed
    #[arg(short = 't', long = "type", value_enum, default_value_t = ExecutionTypeArg::Load)]
    pub execution_type: ExecutionTypeArg,
    #[arg(short, long, help = "Repetitions performed")]
    pub reps: Option<u32>,
    #[arg(short, long, help = "Weight used in kilograms")]
    pub weight: Option<f64>,
    #[arg(short, long, help = "Duration in seconds")]
    pub duration: Option<u32>,
    #[arg(short, long, help = "Free-text notes")]
    pub notes: Option<String>,
}

impl From<LogSetArgs> for LogExecution {
    fn from(val: LogSetArgs) -> Self {
        LogExecution {
            exercise_id: val.exercise_id,
            plan_entry_id: val.plan_entry_id,
            execution_type: val.execution_type.into(),
            reps: val.reps,
            weight: val.weight,
            duration_sec: val.duration,
            notes: val.notes,
        }
    }
}

/// Record a cardio session
#[derive(Args)]
pub struct LogCardioArgs {
    /// Activity, e.g. Run or Bike
    pub modality: String,
    /// Duration in minutes
    pub minutes: u32,
    #[arg(short, long, help = "Distance covered in kilometres")]
    pub distance: Option<f64>,
    #[arg(short, long, help = "Free-text notes")]
    pub notes: Option<String>,
}

impl From<LogCardioArgs> for LogCardio {
    fn from(val: LogCardioArgs) -> Self {
        LogCardio {
            modality: val.modality,
            duration_minutes: val.minutes,
            distance_km: val.distance,
            notes: val.notes,
        }
    }
}

/// Show the most recent executions of one exercise
#[derive(Args)]
pub struct HistoryArgs {
    #[arg(help = "ID of the exercise")]
    pub exercise_id: u64,
    #[arg(short, long, help = "Number of records to show (default 10, at most 50)")]
    pub limit: Option<u32>,
}

impl From<HistoryArgs> for ExecutionHistory {
    fn from(val: HistoryArgs) -> Self {
        ExecutionHistory {
            exercise_id: val.exercise_id,
            limit: val.limit,
        }
    }
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// Record one completed set or session of an exercise
    #[command(alias = "s")]
    Set(LogSetArgs),
    /// Record a cardio session
    #[command(alias = "c")]
    Cardio(LogCardioArgs),
    /// Show the most recent executions of one exercise
    #[command(alias = "h")]
    History(HistoryArgs),
}

// ============================================================================
// Day commands
// ============================================================================

/// Show the habit log of a day
#[derive(Args)]
pub struct ShowDayArgs {
    #[arg(long, help = "Date as YYYY-MM-DD; today when omitted")]
    pub date: Option<String>,
}

impl From<ShowDayArgs> for DayOf {
    fn from(val: ShowDayArgs) -> Self {
        DayOf { date: val.date }
    }
}

/// Save the habit log of a day, replacing water and food for that date
#[derive(Args)]
pub struct SaveDayArgs {
    #[arg(short, long, help = "Water intake in liters")]
    pub water: f64,
    #[arg(short, long, value_enum, help = "Diet adherence for the day")]
    pub food: FoodIntakeArg,
    #[arg(short, long, help = "Free-text note; the stored note is kept when omitted")]
    pub note: Option<String>,
    #[arg(long, help = "Date as YYYY-MM-DD; today when omitted")]
    pub date: Option<String>,
}

impl From<SaveDayArgs> for SaveDailyLog {
    fn from(val: SaveDayArgs) -> Self {
        SaveDailyLog {
            date: val.date,
            water_liters: val.water,
            food_intake: val.food.into(),
            note: val.note,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Show the habit log of a day
    #[command(alias = "s")]
    Show(ShowDayArgs),
    /// Save the habit log of a day
    Save(SaveDayArgs),
}

// ============================================================================
// Week selection
// ============================================================================

/// Select a week by any date inside it
#[derive(Args)]
pub struct WeekArgs {
    #[arg(short, long, help = "Any date in the week as YYYY-MM-DD; the current week when omitted")]
    pub week: Option<String>,
}

impl From<WeekArgs> for WeekOf {
    fn from(val: WeekArgs) -> Self {
        WeekOf { date: val.week }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs subcommands against a tracker and renders their markdown output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        let output = match command {
            ExerciseCommands::Add(args) => self
                .tracker
                .create_exercise_result(&args.into())
                .await
                .context("Failed to create exercise")?
                .to_string(),
            ExerciseCommands::List => self
                .tracker
                .exercise_catalog()
                .await
                .context("Failed to list exercises")?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        let output = match command {
            PlanCommands::Add(args) => self
                .tracker
                .add_plan_entry_result(&args.into())
                .await
                .context("Failed to add plan entry")?
                .to_string(),
            PlanCommands::Show(ShowPlanArgs { week_day: None }) => self
                .tracker
                .weekly_plan_view()
                .await
                .context("Failed to load weekly plan")?
                .to_string(),
            PlanCommands::Show(ShowPlanArgs { week_day }) => self
                .tracker
                .day_plan_view(&PlanDay { week_day })
                .await
                .context("Failed to load day plan")?,
            PlanCommands::Today => self
                .tracker
                .day_plan_view(&PlanDay::default())
                .await
                .context("Failed to load today's plan")?,
        };
        self.renderer.render(&output)
    }

    pub async fn handle_log_command(&self, command: LogCommands) -> Result<()> {
        let output = match command {
            LogCommands::Set(args) => self
                .tracker
                .log_execution_result(&args.into())
                .await
                .context("Failed to log execution")?
                .to_string(),
            LogCommands::Cardio(args) => self
                .tracker
                .log_cardio_result(&args.into())
                .await
                .context("Failed to log cardio session")?
                .to_string(),
            LogCommands::History(args) => self
                .tracker
                .execution_history_view(&args.into())
                .await
                .context("Failed to load execution history")?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        let output = match command {
            DayCommands::Show(args) => self
                .tracker
                .daily_log_view(&args.into())
                .await
                .context("Failed to load daily log")?,
            DayCommands::Save(args) => self
                .tracker
                .save_daily_log_result(&args.into())
                .await
                .context("Failed to save daily log")?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn show_progress(&self, params: &WeekOf) -> Result<()> {
        let progress = self
            .tracker
            .weekly_progress(params)
            .await
            .context("Failed to compute weekly progress")?;
        self.renderer.render(&progress.to_string())
    }

    pub async fn show_cardio(&self, params: &WeekOf) -> Result<()> {
        let week = self
            .tracker
            .weekly_cardio(params)
            .await
            .context("Failed to load cardio sessions")?;
        self.renderer.render(&week.to_string())
    }

    pub async fn seed(&self) -> Result<()> {
        let status = self
            .tracker
            .seed_demo_data_status()
            .await
            .context("Failed to seed demo data")?;
        self.renderer.render(&status.to_string())
    }
}
