use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use finplan_core::models::{Regime, RegimeSchedule};
use finplan_data::SlabLoader;

use crate::config::CliConfig;
use crate::utils::format_inr;

/// Print the slab tables for an assessment year.
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Slab CSV to load (defaults to the configured file, then the
    /// built-in 2024-25 tables)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Assessment year to print
    #[arg(long)]
    pub year: Option<String>,

    /// Limit output to one regime (old or new)
    #[arg(long, value_parser = parse_regime)]
    pub regime: Option<Regime>,

    /// Emit the schedules as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_regime(s: &str) -> Result<Regime, String> {
    Regime::parse(s).ok_or_else(|| format!("unknown regime '{s}' (expected 'old' or 'new')"))
}

pub fn run(args: &ScheduleArgs, config: &CliConfig) -> Result<()> {
    let file = args.file.as_ref().or(config.schedule_file.as_ref());
    let year = args
        .year
        .as_deref()
        .unwrap_or_else(|| config.assessment_year());

    let (old, new) = match file {
        Some(path) => SlabLoader::load_both_from_file(path, year)
            .with_context(|| format!("failed to load schedules from {}", path.display()))?,
        None => (
            RegimeSchedule::fy_2024_25_old(),
            RegimeSchedule::fy_2024_25_new(),
        ),
    };

    let schedules: Vec<&RegimeSchedule> = match args.regime {
        Some(Regime::Old) => vec![&old],
        Some(Regime::New) => vec![&new],
        None => vec![&old, &new],
    };

    if args.json || config.json.unwrap_or(false) {
        println!("{}", serde_json::to_string_pretty(&schedules)?);
        return Ok(());
    }

    for schedule in schedules {
        print_schedule(schedule);
    }
    Ok(())
}

fn print_schedule(schedule: &RegimeSchedule) {
    println!(
        "{} regime, assessment year {}",
        schedule.regime, schedule.assessment_year
    );
    println!(
        "  rebate up to ₹{} for income up to ₹{}, cess {}%, standard deduction ₹{}",
        format_inr(schedule.rebate_cap),
        format_inr(schedule.rebate_income_ceiling),
        schedule.cess_rate * rust_decimal::Decimal::ONE_HUNDRED,
        format_inr(schedule.standard_deduction),
    );
    for slab in &schedule.slabs {
        let upper = slab
            .max_income
            .map(|m| format!("₹{}", format_inr(m)))
            .unwrap_or_else(|| "and above".to_string());
        println!(
            "  ₹{:>12} - {:>13}  rate {:>3}%  accumulated base ₹{}",
            format_inr(slab.min_income),
            upper,
            slab.rate * rust_decimal::Decimal::ONE_HUNDRED,
            format_inr(slab.base_tax),
        );
    }
    println!();
}
