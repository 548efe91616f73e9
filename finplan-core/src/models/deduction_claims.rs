use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw deduction amounts claimed by the filer, grouped by statutory section.
///
/// These are the amounts as entered; statutory ceilings are applied later by
/// the deduction engine, so any field here may exceed its section cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionClaims {
    // Section 80C instruments (capped as a group)
    pub ppf: Decimal,
    pub epf: Decimal,
    pub elss: Decimal,
    pub life_insurance_premium: Decimal,
    pub tuition_fees: Decimal,
    pub home_loan_principal: Decimal,
    pub nsc: Decimal,

    // Section 80D health-insurance premiums
    pub health_insurance_self: Decimal,
    pub health_insurance_parents: Decimal,
    pub preventive_checkup: Decimal,

    // Section 80G donations
    pub donations: Decimal,

    // Section 80E education-loan interest (no statutory ceiling)
    pub education_loan_interest: Decimal,

    // Section 80EEA affordable-housing loan interest
    pub affordable_home_loan_interest: Decimal,

    // Section 80TTA savings-account interest
    pub savings_account_interest: Decimal,

    // Section 80CCD(1B) additional NPS contribution
    pub nps_additional: Decimal,

    // Uncapped pass-through items
    pub ev_loan_interest: Decimal,
    pub startup_investment: Decimal,
    pub rural_development: Decimal,
    pub other: Decimal,
}

impl DeductionClaims {
    /// Combined raw 80C claim across all instruments.
    pub fn section_80c_total(&self) -> Decimal {
        self.ppf
            + self.epf
            + self.elss
            + self.life_insurance_premium
            + self.tuition_fees
            + self.home_loan_principal
            + self.nsc
    }

    /// Combined raw 80D claim across all premium kinds.
    pub fn section_80d_total(&self) -> Decimal {
        self.health_insurance_self + self.health_insurance_parents + self.preventive_checkup
    }

    /// Combined raw pass-through claim (items with no statutory ceiling).
    pub fn pass_through_total(&self) -> Decimal {
        self.ev_loan_interest + self.startup_investment + self.rural_development + self.other
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn section_80c_total_sums_all_instruments() {
        let claims = DeductionClaims {
            ppf: dec!(50000),
            epf: dec!(30000),
            elss: dec!(25000),
            life_insurance_premium: dec!(15000),
            tuition_fees: dec!(20000),
            home_loan_principal: dec!(40000),
            nsc: dec!(10000),
            ..Default::default()
        };

        assert_eq!(claims.section_80c_total(), dec!(190000));
    }

    #[test]
    fn section_80d_total_sums_premiums() {
        let claims = DeductionClaims {
            health_insurance_self: dec!(25000),
            health_insurance_parents: dec!(40000),
            preventive_checkup: dec!(5000),
            ..Default::default()
        };

        assert_eq!(claims.section_80d_total(), dec!(70000));
    }

    #[test]
    fn totals_are_zero_by_default() {
        let claims = DeductionClaims::default();

        assert_eq!(claims.section_80c_total(), Decimal::ZERO);
        assert_eq!(claims.section_80d_total(), Decimal::ZERO);
        assert_eq!(claims.pass_through_total(), Decimal::ZERO);
    }
}
