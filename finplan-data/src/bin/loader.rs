use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use finplan_data::SlabLoader;

/// Validate a slab schedule CSV file and print the assembled schedules.
///
/// The CSV file should have the following columns:
/// - assessment_year: e.g. 2024-25
/// - regime: old or new
/// - min_income: the slab's exclusive lower bound
/// - max_income: the inclusive upper bound (empty for open-ended)
/// - base_tax: tax accumulated over all lower slabs
/// - rate: the marginal rate as a decimal (e.g. 0.05)
#[derive(Parser, Debug)]
#[command(name = "finplan-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing slab schedule data
    #[arg(short, long)]
    file: PathBuf,

    /// Assessment year to assemble schedules for
    #[arg(short, long, default_value = "2024-25")]
    year: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading slab schedules from: {}", args.file.display());

    let (old, new) = SlabLoader::load_both_from_file(&args.file, &args.year)
        .with_context(|| format!("Failed to load schedules from: {}", args.file.display()))?;

    for schedule in [&old, &new] {
        println!(
            "\n{} regime, assessment year {} ({} slabs, rebate up to {} below {}):",
            schedule.regime,
            schedule.assessment_year,
            schedule.slabs.len(),
            schedule.rebate_cap,
            schedule.rebate_income_ceiling,
        );
        for slab in &schedule.slabs {
            let upper = slab
                .max_income
                .map(|m| m.to_string())
                .unwrap_or_else(|| "above".to_string());
            println!(
                "  {:>10} - {:>10}  rate {:>5}  base {:>10}",
                slab.min_income, upper, slab.rate, slab.base_tax
            );
        }
    }

    println!("\nBoth schedules validated successfully.");

    Ok(())
}
