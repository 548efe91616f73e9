//! Risk-profile scoring and allocation recommendation.
//!
//! Four self-reported inputs are folded into a 1-10 composite score,
//! which maps to one of five fixed allocation bands. All arithmetic is
//! integral; inputs outside their expected ranges are clamped rather than
//! rejected, matching the slider-constrained origin of the data.
//!
//! # Example
//!
//! ```
//! use finplan_core::calculations::{RiskProfileInput, recommend};
//! use finplan_core::models::AllocationBand;
//!
//! let input = RiskProfileInput {
//!     age: 28,
//!     monthly_income: 120_000,
//!     horizon_years: 15,
//!     risk_tolerance: 4,
//! };
//!
//! let rec = recommend(&input);
//! assert_eq!(rec.score, 8);
//! assert_eq!(rec.band, AllocationBand::Aggressive);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{AllocationBand, PortfolioAllocation};

/// Self-reported inputs to the risk profiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfileInput {
    /// Age in years; the age factor assumes an adult investor.
    pub age: u32,
    /// Monthly income in rupees.
    pub monthly_income: u64,
    /// Intended investment horizon in years.
    pub horizon_years: u32,
    /// Self-rated risk tolerance on a 1-5 scale (clamped).
    pub risk_tolerance: u8,
}

/// A scored recommendation: the composite, its band, and the band's
/// fixed split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecommendation {
    pub score: u8,
    pub band: AllocationBand,
    pub allocation: PortfolioAllocation,
}

/// Younger investors score higher: 10 at age 18, dropping one point per
/// five years, floored at 1.
fn age_factor(age: u32) -> u64 {
    let reduction = u64::from(age.saturating_sub(18)) / 5;
    (10u64.saturating_sub(reduction)).max(1)
}

/// One point per 20,000 of monthly income, clamped to 1-10.
fn income_factor(monthly_income: u64) -> u64 {
    (monthly_income / 20_000).clamp(1, 10)
}

/// Horizon in years, clamped to 1-10.
fn horizon_factor(horizon_years: u32) -> u64 {
    u64::from(horizon_years).clamp(1, 10)
}

/// Self-rating doubled, so it weighs 2-10 against the other factors.
fn tolerance_factor(risk_tolerance: u8) -> u64 {
    u64::from(risk_tolerance.clamp(1, 5)) * 2
}

/// Computes the 1-10 composite risk score.
///
/// The four factors are averaged with half-up rounding; by construction
/// the result always lands in 1..=10.
pub fn risk_score(input: &RiskProfileInput) -> u8 {
    let sum = age_factor(input.age)
        + income_factor(input.monthly_income)
        + horizon_factor(input.horizon_years)
        + tolerance_factor(input.risk_tolerance);
    // Integer half-up rounding of sum / 4.
    ((sum + 2) / 4) as u8
}

/// Maps the inputs to a full recommendation. Total function; no error
/// states.
pub fn recommend(input: &RiskProfileInput) -> RiskRecommendation {
    let score = risk_score(input);
    let band = AllocationBand::for_score(score);
    RiskRecommendation {
        score,
        band,
        allocation: band.allocation(),
    }
}
