use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use studyroom_core::Today;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyroom-cli", version, about = "Studyroom CLI")]
struct Cli {
    /// Snapshot file to read and update (default: <data dir>/snapshot.json)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derived study statistics
    Stats {
        /// Report focus time rounded to whole hours
        #[arg(long)]
        whole_hours: bool,
    },
    /// Today's summary
    Today,
    /// Unlocked and locked achievements
    Achievements {
        /// List locked achievements instead
        #[arg(long)]
        locked: bool,
    },
    /// Tasks grouped by day
    Agenda(commands::agenda::AgendaArgs),
    /// Upcoming exams
    Exams,
    /// Search tasks, subjects and exams
    Search {
        /// Text to look for
        query: String,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("STUDYROOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let today = match cli.today {
        Some(date) => Today::with_offset(date, Today::now().offset()),
        None => Today::now(),
    };
    let ctx = commands::Context {
        snapshot: cli.snapshot,
        today,
    };

    let result = match cli.command {
        Commands::Stats { whole_hours } => commands::stats::run(&ctx, whole_hours),
        Commands::Today => commands::stats::today(&ctx),
        Commands::Achievements { locked } => commands::stats::achievements(&ctx, locked),
        Commands::Agenda(args) => commands::agenda::run(&ctx, args),
        Commands::Exams => commands::agenda::exams(&ctx),
        Commands::Search { query } => commands::agenda::search(&ctx, &query),
        Commands::Task { action } => commands::task::run(&ctx, action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
