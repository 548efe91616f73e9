use anyhow::Result;
use clap::Args;

use finplan_core::calculations::{RiskProfileInput, recommend};

use crate::config::CliConfig;

/// Score a risk profile and print the recommended allocation.
#[derive(Debug, Args)]
pub struct RiskArgs {
    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Monthly income in rupees
    #[arg(long = "monthly-income")]
    pub monthly_income: u64,

    /// Intended investment horizon in years
    #[arg(long)]
    pub horizon: u32,

    /// Risk tolerance self-rating, 1 (lowest) to 5 (highest)
    #[arg(long)]
    pub tolerance: u8,

    /// Emit the recommendation as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &RiskArgs, config: &CliConfig) -> Result<()> {
    let input = RiskProfileInput {
        age: args.age,
        monthly_income: args.monthly_income,
        horizon_years: args.horizon,
        risk_tolerance: args.tolerance,
    };

    let rec = recommend(&input);

    if args.json || config.json.unwrap_or(false) {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    println!("Risk score: {}/10", rec.score);
    println!("Profile:    {}", rec.band);
    println!(
        "Allocation: {}% equity / {}% debt / {}% alternatives",
        rec.allocation.equity_pct, rec.allocation.debt_pct, rec.allocation.alternatives_pct
    );
    Ok(())
}
