use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use finplan_cli::commands::{self, RiskArgs, ScheduleArgs, TaxArgs};
use finplan_cli::config::CliConfig;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal-finance planner for Indian taxpayers.
///
/// Computes income-tax liability under both regimes, scores risk
/// profiles into allocation recommendations, and prints slab schedules.
#[derive(Debug, Parser)]
#[command(name = "finplan", version, about)]
struct Cli {
    /// Path to a finplan.toml config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute tax liability under both regimes
    Tax(TaxArgs),
    /// Score a risk profile into an allocation recommendation
    Risk(RiskArgs),
    /// Print the slab schedules for an assessment year
    Schedule(ScheduleArgs),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    debug!(assessment_year = config.assessment_year(), "config resolved");

    match &cli.command {
        Command::Tax(args) => commands::tax::run(args, &config),
        Command::Risk(args) => commands::risk::run(args, &config),
        Command::Schedule(args) => commands::schedule::run(args, &config),
    }
}
