//! Calculation engines for the personal-finance planner.
//!
//! Everything here is a pure, synchronous function of its inputs: the
//! two-regime income-tax engine, the statutory deduction-capping rules,
//! and the risk-profile scoring that backs allocation recommendations.

pub mod common;
pub mod deductions;
pub mod risk;
pub mod tax;

pub use deductions::{DeductionBreakdown, SectionCaps, SectionUsage, cap_deduction};
pub use risk::{RiskProfileInput, RiskRecommendation, recommend};
pub use tax::{Assessment, AssessmentResult, RegimeCalculator, RegimeComputation, TaxError};
