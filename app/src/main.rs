//! Wellbeing Tracker
//!
//! A local-first personal wellbeing tracker: daily nutrition, exercise,
//! sleep, hydration, and subjective metrics logged against reusable
//! inventories.
//!
//! ## Architecture
//!
//! The application follows a layered architecture:
//! - CLI: command parsing and terminal output
//! - Services: business logic
//! - Repositories: data access over the in-memory store
//! - Store: snapshot-backed keyed collections

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wellbeing_tracker_app::config::AppConfig;
use wellbeing_tracker_app::error::{AppError, AppResult};
use wellbeing_tracker_app::services::{
    BackupService, ImportMode, ProfileService, SummaryService,
};
use wellbeing_tracker_app::services::summary::TREND_DAYS_DEFAULT;
use wellbeing_tracker_app::state::App;

#[derive(Parser)]
#[command(name = "wellbeing-tracker", version, about = "Local-first personal wellbeing tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the snapshot file and the default profile
    Init,
    /// Show one day's totals and progress against targets
    Summary {
        /// Day to summarize (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show a trailing multi-day trend table
    Trend {
        /// Number of days in the window
        #[arg(long, default_value_t = TREND_DAYS_DEFAULT)]
        days: u32,
        /// Last day of the window (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Write a JSON backup of the active profile's data
    Export {
        /// Output file (default stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Apply a JSON backup to the store
    Import {
        /// Backup file to read
        file: PathBuf,
        /// merge keeps existing records, overwrite replaces them
        #[arg(long, default_value = "merge")]
        mode: String,
    },
    /// Write the food and workout inventories as a shareable pack
    ShareExport {
        /// Output file (default stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Name embedded in the pack
        #[arg(long, default_value = "My inventory")]
        name: String,
    },
    /// Import a shared inventory pack, minting fresh ids
    ShareImport {
        /// Share pack file to read
        file: PathBuf,
    },
    /// Write the trend series as CSV
    ExportCsv {
        /// Output file (default stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Number of days in the window
        #[arg(long, default_value_t = TREND_DAYS_DEFAULT)]
        days: u32,
        /// Last day of the window (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show record counts per collection
    Stats,
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e.report());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting Wellbeing Tracker"
    );

    let mut app = App::open(config)?;
    let profile = ProfileService::ensure_default(&mut app.db, &app.config.defaults.profile_name)?;

    match cli.command {
        Command::Init => {
            println!(
                "Initialized store at {} (active profile: {})",
                app.snapshot_path().display(),
                profile.name
            );
        }
        Command::Summary { date } => {
            let date = date.unwrap_or_else(today);
            let summary = SummaryService::daily_summary(app.db(), profile.id, date);
            print_json(&summary)?;
        }
        Command::Trend { days, date } => {
            let end = date.unwrap_or_else(today);
            let points = SummaryService::trend(app.db(), profile.id, end, days);
            println!(
                "{:<12} {:>8} {:>9} {:>8} {:>7} {:>7} {:>8}",
                "date", "kcal in", "kcal out", "net", "sleep", "steps", "water"
            );
            for p in points {
                println!(
                    "{:<12} {:>8} {:>9} {:>8} {:>7.1} {:>7} {:>8}",
                    p.date,
                    p.calories_consumed,
                    p.calories_burned,
                    p.net_calories,
                    p.sleep_hours,
                    p.steps,
                    p.water_ml
                );
            }
        }
        Command::Export { out } => {
            let json = BackupService::export_json(app.db(), profile.id)?;
            write_output(out, &json)?;
        }
        Command::Import { file, mode } => {
            let mode: ImportMode = mode.parse().map_err(AppError::Validation)?;
            let raw = std::fs::read_to_string(&file)?;
            let summary = BackupService::import_json(app.db_mut(), profile.id, &raw, mode)?;
            print_json(&summary)?;
        }
        Command::ShareExport { out, name } => {
            let json = BackupService::share_export_json(app.db(), &name)?;
            write_output(out, &json)?;
        }
        Command::ShareImport { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let summary = BackupService::share_import_json(app.db_mut(), &raw)?;
            print_json(&summary)?;
        }
        Command::ExportCsv { out, days, date } => {
            let end = date.unwrap_or_else(today);
            let csv = BackupService::trend_csv(app.db(), profile.id, end, days)?;
            write_output(out, &csv)?;
        }
        Command::Stats => {
            print_json(&app.db().counts())?;
        }
    }

    app.flush()?;
    Ok(())
}

/// Today in the local timezone; logs are kept per calendar day
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON serialization error: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn write_output(out: Option<PathBuf>, content: &str) -> AppResult<()> {
    match out {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "wellbeing_tracker=info,wellbeing_tracker_app=info".into()
        } else {
            "wellbeing_tracker=debug,wellbeing_tracker_app=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
