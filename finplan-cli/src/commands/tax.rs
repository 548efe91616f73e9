use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use rust_decimal::Decimal;
use tracing::debug;

use finplan_core::calculations::{Assessment, AssessmentResult, SectionCaps};
use finplan_core::models::{DeductionClaims, IncomeStatement};

use crate::config::CliConfig;
use crate::utils::{format_inr, parse_amount};

/// Compute the liability under both regimes for one income statement.
#[derive(Debug, Args)]
pub struct TaxArgs {
    /// Annual salary income
    #[arg(long, default_value = "0")]
    pub salary: String,

    /// Annual rental income
    #[arg(long, default_value = "0")]
    pub rental: String,

    /// Annual business income
    #[arg(long, default_value = "0")]
    pub business: String,

    /// Capital gains for the year
    #[arg(long = "capital-gains", default_value = "0")]
    pub capital_gains: String,

    /// Savings and deposit interest earned
    #[arg(long, default_value = "0")]
    pub interest: String,

    /// Any other income
    #[arg(long, default_value = "0")]
    pub other: String,

    /// Deduction claim as SECTION=AMOUNT, repeatable
    /// (e.g. --claim ppf=1,50,000 --claim health-insurance-self=25000)
    #[arg(long = "claim", value_name = "SECTION=AMOUNT")]
    pub claims: Vec<String>,

    /// JSON file holding a full set of deduction claims
    #[arg(long, value_name = "FILE")]
    pub claims_file: Option<PathBuf>,

    /// Emit the full assessment as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &TaxArgs, config: &CliConfig) -> Result<()> {
    let income = IncomeStatement {
        salary: parse_amount(&args.salary)?,
        rental: parse_amount(&args.rental)?,
        business: parse_amount(&args.business)?,
        capital_gains: parse_amount(&args.capital_gains)?,
        interest: parse_amount(&args.interest)?,
        other: parse_amount(&args.other)?,
    };

    let mut claims = match &args.claims_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read claims file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse claims file {}", path.display()))?
        }
        None => DeductionClaims::default(),
    };
    for pair in &args.claims {
        let Some((section, amount)) = pair.split_once('=') else {
            bail!("claim '{pair}' is not in SECTION=AMOUNT form");
        };
        apply_claim(&mut claims, section.trim(), parse_amount(amount)?)?;
    }

    let (old, new) = super::resolve_schedules(config)?;
    let caps = SectionCaps::default();
    debug!(assessment_year = %old.assessment_year, "running assessment");

    let result = Assessment::new(&old, &new, &caps).assess(&income, &claims)?;

    if args.json || config.json.unwrap_or(false) {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_assessment(&result);
    Ok(())
}

/// Routes a `--claim SECTION=AMOUNT` pair onto its claims field. Section
/// names are an explicit enumeration; nothing is matched by substring.
fn apply_claim(claims: &mut DeductionClaims, section: &str, amount: Decimal) -> Result<()> {
    let field = match section {
        "ppf" => &mut claims.ppf,
        "epf" => &mut claims.epf,
        "elss" => &mut claims.elss,
        "life-insurance-premium" => &mut claims.life_insurance_premium,
        "tuition-fees" => &mut claims.tuition_fees,
        "home-loan-principal" => &mut claims.home_loan_principal,
        "nsc" => &mut claims.nsc,
        "health-insurance-self" => &mut claims.health_insurance_self,
        "health-insurance-parents" => &mut claims.health_insurance_parents,
        "preventive-checkup" => &mut claims.preventive_checkup,
        "donations" => &mut claims.donations,
        "education-loan-interest" => &mut claims.education_loan_interest,
        "affordable-home-loan-interest" => &mut claims.affordable_home_loan_interest,
        "savings-account-interest" => &mut claims.savings_account_interest,
        "nps-additional" => &mut claims.nps_additional,
        "ev-loan-interest" => &mut claims.ev_loan_interest,
        "startup-investment" => &mut claims.startup_investment,
        "rural-development" => &mut claims.rural_development,
        "other" => &mut claims.other,
        unknown => bail!("unknown deduction section '{unknown}'"),
    };
    *field = amount;
    Ok(())
}

fn print_assessment(result: &AssessmentResult) {
    println!("Gross income:        ₹{}", format_inr(result.gross_income));
    println!(
        "Standard deduction:  ₹{}",
        format_inr(result.standard_deduction_applied)
    );
    println!(
        "Deductions allowed:  ₹{}",
        format_inr(result.deductions.total_allowed())
    );
    println!("Taxable income:      ₹{}", format_inr(result.taxable_income));

    // Call out claims that lost part of their value to a section ceiling.
    let capped = [
        ("80C", &result.deductions.section_80c),
        ("80D", &result.deductions.section_80d),
        ("80G", &result.deductions.section_80g),
        ("80EEA", &result.deductions.section_80eea),
        ("80TTA", &result.deductions.section_80tta),
        ("80CCD(1B)", &result.deductions.nps_additional),
    ];
    for (section, usage) in capped {
        if usage.claimed > usage.allowed {
            println!(
                "  note: {section} claim of ₹{} capped at ₹{}",
                format_inr(usage.claimed),
                format_inr(usage.allowed)
            );
        }
    }

    println!();
    println!("{:<20} {:>15} {:>15}", "", "old regime", "new regime");
    for (label, old, new) in [
        (
            "Tax before rebate",
            result.old.tax_before_rebate,
            result.new.tax_before_rebate,
        ),
        (
            "Rebate (87A)",
            result.old.rebate_applied,
            result.new.rebate_applied,
        ),
        ("Income tax", result.old.income_tax, result.new.income_tax),
        ("Cess (4%)", result.old.cess, result.new.cess),
        ("Total tax", result.old.total_tax, result.new.total_tax),
    ] {
        println!(
            "{:<20} {:>15} {:>15}",
            label,
            format_inr(old),
            format_inr(new)
        );
    }

    let cheaper = result.cheaper_regime();
    let saving = (result.old.total_tax - result.new.total_tax).abs();
    println!();
    println!(
        "Cheaper regime: {} (saves ₹{})",
        cheaper,
        format_inr(saving)
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn apply_claim_routes_known_sections() {
        let mut claims = DeductionClaims::default();

        apply_claim(&mut claims, "ppf", dec!(150000)).unwrap();
        apply_claim(&mut claims, "health-insurance-self", dec!(25000)).unwrap();

        assert_eq!(claims.ppf, dec!(150000));
        assert_eq!(claims.health_insurance_self, dec!(25000));
    }

    #[test]
    fn apply_claim_rejects_unknown_sections() {
        let mut claims = DeductionClaims::default();

        assert!(apply_claim(&mut claims, "80z", dec!(1)).is_err());
    }
}
