//! Statutory deduction-capping rules.
//!
//! Raw claimed amounts are grouped by section in
//! [`DeductionClaims`](crate::models::DeductionClaims); this module applies
//! each section's statutory ceiling to produce the *usable* amounts. The
//! raw entry may exceed its cap, the allowed amount never does. Section
//! 80TTA is additionally bounded by the actual savings interest earned, so
//! it needs the income statement's interest figure as an input.
//!
//! Negative claims are not rejected here; the engine trusts its caller to
//! have coerced form input to non-negative numbers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::DeductionClaims;

/// Statutory ceilings per deduction section.
///
/// `Default` carries the assessment-year 2024-25 values. Sections with no
/// ceiling (80E and the pass-through items) have no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCaps {
    /// Section 80C group ceiling (PPF, EPF, ELSS, premiums, tuition, ...).
    pub section_80c: Decimal,
    /// Section 80D health-insurance premium ceiling.
    pub section_80d: Decimal,
    /// Section 80G donations ceiling.
    pub section_80g: Decimal,
    /// Section 80EEA affordable-housing loan interest ceiling.
    pub section_80eea: Decimal,
    /// Section 80TTA savings-interest ceiling (also bounded by actual
    /// interest income).
    pub section_80tta: Decimal,
    /// Section 80CCD(1B) additional NPS contribution ceiling.
    pub nps_additional: Decimal,
}

impl Default for SectionCaps {
    fn default() -> Self {
        Self {
            section_80c: dec!(150000),
            section_80d: dec!(75000),
            section_80g: dec!(100000),
            section_80eea: dec!(150000),
            section_80tta: dec!(10000),
            nps_additional: dec!(50000),
        }
    }
}

/// Caps a raw claimed amount at its statutory limit.
///
/// There is no error path; negative inputs are passed through unchecked.
pub fn cap_deduction(raw: Decimal, limit: Decimal) -> Decimal {
    raw.min(limit)
}

/// Claimed and allowed amounts for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionUsage {
    /// Raw amount as entered, before any ceiling.
    pub claimed: Decimal,
    /// Usable amount after the statutory ceiling.
    pub allowed: Decimal,
}

impl SectionUsage {
    fn capped(claimed: Decimal, limit: Decimal) -> Self {
        Self {
            claimed,
            allowed: cap_deduction(claimed, limit),
        }
    }

    fn uncapped(claimed: Decimal) -> Self {
        Self {
            claimed,
            allowed: claimed,
        }
    }
}

/// Per-section usable deduction amounts for one set of claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub section_80c: SectionUsage,
    pub section_80d: SectionUsage,
    pub section_80g: SectionUsage,
    pub section_80e: SectionUsage,
    pub section_80eea: SectionUsage,
    pub section_80tta: SectionUsage,
    pub nps_additional: SectionUsage,
    pub pass_through: SectionUsage,
}

impl DeductionBreakdown {
    /// Applies every section's ceiling to the raw claims.
    ///
    /// `interest_income` is the filer's actual savings interest; the 80TTA
    /// allowance can never exceed it.
    pub fn from_claims(
        claims: &DeductionClaims,
        caps: &SectionCaps,
        interest_income: Decimal,
    ) -> Self {
        let tta_limit = caps.section_80tta.min(interest_income);
        Self {
            section_80c: SectionUsage::capped(claims.section_80c_total(), caps.section_80c),
            section_80d: SectionUsage::capped(claims.section_80d_total(), caps.section_80d),
            section_80g: SectionUsage::capped(claims.donations, caps.section_80g),
            section_80e: SectionUsage::uncapped(claims.education_loan_interest),
            section_80eea: SectionUsage::capped(
                claims.affordable_home_loan_interest,
                caps.section_80eea,
            ),
            section_80tta: SectionUsage::capped(claims.savings_account_interest, tta_limit),
            nps_additional: SectionUsage::capped(claims.nps_additional, caps.nps_additional),
            pass_through: SectionUsage::uncapped(claims.pass_through_total()),
        }
    }

    /// Sum of the usable amounts across every section.
    pub fn total_allowed(&self) -> Decimal {
        self.section_80c.allowed
            + self.section_80d.allowed
            + self.section_80g.allowed
            + self.section_80e.allowed
            + self.section_80eea.allowed
            + self.section_80tta.allowed
            + self.nps_additional.allowed
            + self.pass_through.allowed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // cap_deduction
    // =========================================================================

    #[test]
    fn cap_deduction_passes_amounts_under_the_limit() {
        assert_eq!(cap_deduction(dec!(90000), dec!(150000)), dec!(90000));
    }

    #[test]
    fn cap_deduction_clamps_amounts_over_the_limit() {
        assert_eq!(cap_deduction(dec!(190000), dec!(150000)), dec!(150000));
    }

    #[test]
    fn cap_deduction_at_the_limit_is_the_limit() {
        assert_eq!(cap_deduction(dec!(150000), dec!(150000)), dec!(150000));
    }

    // =========================================================================
    // breakdown
    // =========================================================================

    #[test]
    fn section_80c_group_is_capped_at_150000() {
        let claims = DeductionClaims {
            ppf: dec!(150000),
            elss: dec!(50000),
            ..Default::default()
        };

        let breakdown =
            DeductionBreakdown::from_claims(&claims, &SectionCaps::default(), Decimal::ZERO);

        assert_eq!(breakdown.section_80c.claimed, dec!(200000));
        assert_eq!(breakdown.section_80c.allowed, dec!(150000));
    }

    #[test]
    fn section_80e_is_uncapped() {
        let claims = DeductionClaims {
            education_loan_interest: dec!(400000),
            ..Default::default()
        };

        let breakdown =
            DeductionBreakdown::from_claims(&claims, &SectionCaps::default(), Decimal::ZERO);

        assert_eq!(breakdown.section_80e.allowed, dec!(400000));
    }

    #[test]
    fn section_80tta_is_bounded_by_actual_interest_income() {
        let claims = DeductionClaims {
            savings_account_interest: dec!(10000),
            ..Default::default()
        };

        // Only 6,000 of interest was actually earned.
        let breakdown =
            DeductionBreakdown::from_claims(&claims, &SectionCaps::default(), dec!(6000));

        assert_eq!(breakdown.section_80tta.allowed, dec!(6000));
    }

    #[test]
    fn section_80tta_statutory_cap_applies_when_interest_is_higher() {
        let claims = DeductionClaims {
            savings_account_interest: dec!(25000),
            ..Default::default()
        };

        let breakdown =
            DeductionBreakdown::from_claims(&claims, &SectionCaps::default(), dec!(25000));

        assert_eq!(breakdown.section_80tta.allowed, dec!(10000));
    }

    #[test]
    fn nps_additional_is_capped_at_50000() {
        let claims = DeductionClaims {
            nps_additional: dec!(80000),
            ..Default::default()
        };

        let breakdown =
            DeductionBreakdown::from_claims(&claims, &SectionCaps::default(), Decimal::ZERO);

        assert_eq!(breakdown.nps_additional.allowed, dec!(50000));
    }

    #[test]
    fn pass_through_items_are_not_capped() {
        let claims = DeductionClaims {
            ev_loan_interest: dec!(150000),
            startup_investment: dec!(500000),
            ..Default::default()
        };

        let breakdown =
            DeductionBreakdown::from_claims(&claims, &SectionCaps::default(), Decimal::ZERO);

        assert_eq!(breakdown.pass_through.allowed, dec!(650000));
    }

    #[test]
    fn total_allowed_sums_every_section() {
        let claims = DeductionClaims {
            ppf: dec!(150000),
            health_insurance_self: dec!(25000),
            donations: dec!(10000),
            ..Default::default()
        };

        let breakdown =
            DeductionBreakdown::from_claims(&claims, &SectionCaps::default(), Decimal::ZERO);

        assert_eq!(breakdown.total_allowed(), dec!(185000));
    }
}
