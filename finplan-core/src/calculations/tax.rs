//! Two-regime income-tax engine.
//!
//! The computation follows the standard Indian assessment sequence:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross total income (sum of all income sources) |
//! | 2    | Standard deduction against salary income |
//! | 3    | Chapter VI-A deductions, capped per section |
//! | 4    | Taxable income (step 1 − step 2 − step 3, floor 0) |
//! | 5    | Slab tax from the regime's marginal schedule |
//! | 6    | Section 87A rebate for income at or below the ceiling |
//! | 7    | Health-and-education cess on the post-rebate tax |
//!
//! Both regimes are computed from the same taxable income so they can be
//! compared side by side; regime-specific deduction eligibility is not
//! modeled.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use finplan_core::calculations::{Assessment, SectionCaps};
//! use finplan_core::models::{DeductionClaims, IncomeStatement, RegimeSchedule};
//!
//! let old = RegimeSchedule::fy_2024_25_old();
//! let new = RegimeSchedule::fy_2024_25_new();
//! let caps = SectionCaps::default();
//!
//! let income = IncomeStatement {
//!     salary: dec!(800000),
//!     ..Default::default()
//! };
//! let claims = DeductionClaims {
//!     ppf: dec!(150000),
//!     health_insurance_self: dec!(25000),
//!     ..Default::default()
//! };
//!
//! let assessment = Assessment::new(&old, &new, &caps);
//! let result = assessment.assess(&income, &claims).unwrap();
//!
//! // 800,000 − 50,000 standard deduction − 175,000 in deductions
//! assert_eq!(result.taxable_income, dec!(575000));
//! assert_eq!(result.old.total_tax, dec!(28600.00));
//! // The new regime's 87A rebate wipes the liability entirely.
//! assert_eq!(result.new.total_tax, dec!(0.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::deductions::{DeductionBreakdown, SectionCaps};
use crate::models::{DeductionClaims, IncomeStatement, Regime, RegimeSchedule, ScheduleError};

/// Errors that can occur while computing tax from a schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxError {
    /// The schedule failed structural validation.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(#[from] ScheduleError),

    /// No slab covered the given taxable income. A validated schedule is
    /// contiguous and open-ended, so this indicates a corrupted schedule.
    #[error("no slab found for taxable income {0}")]
    NoMatchingSlab(Decimal),
}

/// Tax liability under one regime for a given taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComputation {
    pub regime: Regime,

    /// Taxable income the slabs were applied to.
    pub taxable_income: Decimal,

    /// Slab tax before the Section 87A rebate.
    pub tax_before_rebate: Decimal,

    /// Rebate actually applied (0 when income exceeds the ceiling).
    pub rebate_applied: Decimal,

    /// Income tax after the rebate, floored at zero.
    pub income_tax: Decimal,

    /// Health-and-education cess on the income tax.
    pub cess: Decimal,

    /// Final liability: income tax plus cess.
    pub total_tax: Decimal,
}

/// Calculator for a single regime's schedule.
#[derive(Debug, Clone)]
pub struct RegimeCalculator<'a> {
    schedule: &'a RegimeSchedule,
}

impl<'a> RegimeCalculator<'a> {
    pub fn new(schedule: &'a RegimeSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the full liability for `taxable_income` under this
    /// regime's schedule.
    ///
    /// Negative taxable income is floored at zero before the slabs are
    /// applied; the computation is otherwise a total function of its
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError`] if the schedule fails validation or (after a
    /// corrupted schedule slips past validation) no slab matches.
    pub fn compute(&self, taxable_income: Decimal) -> Result<RegimeComputation, TaxError> {
        self.schedule.validate()?;

        let taxable_income = max(taxable_income, Decimal::ZERO);
        let tax_before_rebate = self.slab_tax(taxable_income)?;
        let rebate_applied = self.rebate(taxable_income, tax_before_rebate);
        let income_tax = max(tax_before_rebate - rebate_applied, Decimal::ZERO);
        let cess = round_half_up(income_tax * self.schedule.cess_rate);
        let total_tax = income_tax + cess;

        Ok(RegimeComputation {
            regime: self.schedule.regime,
            taxable_income,
            tax_before_rebate,
            rebate_applied,
            income_tax,
            cess,
            total_tax,
        })
    }

    /// Marginal slab tax before any rebate.
    fn slab_tax(&self, taxable_income: Decimal) -> Result<Decimal, TaxError> {
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let slab = self
            .schedule
            .slab_for(taxable_income)
            .ok_or(TaxError::NoMatchingSlab(taxable_income))?;

        let marginal = taxable_income - slab.min_income;
        Ok(round_half_up(slab.base_tax + marginal * slab.rate))
    }

    /// Section 87A rebate: a full waiver up to the cap when taxable income
    /// is at or below the regime's ceiling.
    fn rebate(&self, taxable_income: Decimal, tax_before_rebate: Decimal) -> Decimal {
        if taxable_income > self.schedule.rebate_income_ceiling {
            return Decimal::ZERO;
        }
        let rebate = tax_before_rebate.min(self.schedule.rebate_cap);
        if rebate > Decimal::ZERO {
            debug!(
                regime = %self.schedule.regime,
                %taxable_income,
                %rebate,
                "section 87A rebate applied"
            );
        }
        rebate
    }
}

/// Result of assessing one income statement against both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Gross total income across all sources.
    pub gross_income: Decimal,

    /// Standard deduction actually applied (bounded by salary income).
    pub standard_deduction_applied: Decimal,

    /// Per-section usable deduction amounts.
    pub deductions: DeductionBreakdown,

    /// Taxable income fed to both regime schedules.
    pub taxable_income: Decimal,

    pub old: RegimeComputation,
    pub new: RegimeComputation,
}

impl AssessmentResult {
    /// The regime with the lower total liability; the new regime wins
    /// ties, since it is the default election.
    pub fn cheaper_regime(&self) -> Regime {
        if self.old.total_tax < self.new.total_tax {
            Regime::Old
        } else {
            Regime::New
        }
    }
}

/// Both-regimes assessment driver.
///
/// Borrows the two schedules and the section caps; every call to
/// [`Assessment::assess`] recomputes the full breakdown from scratch (the
/// slab count is fixed, so this is O(1) per call).
#[derive(Debug, Clone)]
pub struct Assessment<'a> {
    old_schedule: &'a RegimeSchedule,
    new_schedule: &'a RegimeSchedule,
    caps: &'a SectionCaps,
}

impl<'a> Assessment<'a> {
    pub fn new(
        old_schedule: &'a RegimeSchedule,
        new_schedule: &'a RegimeSchedule,
        caps: &'a SectionCaps,
    ) -> Self {
        Self {
            old_schedule,
            new_schedule,
            caps,
        }
    }

    /// Runs the full assessment sequence for one income statement and one
    /// set of deduction claims.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError`] if either schedule fails validation.
    pub fn assess(
        &self,
        income: &IncomeStatement,
        claims: &DeductionClaims,
    ) -> Result<AssessmentResult, TaxError> {
        let gross_income = income.total();

        // The standard deduction applies against salary income only and
        // is modeled identically in both regimes.
        let standard_deduction_applied =
            self.old_schedule.standard_deduction.min(income.salary);

        let deductions = DeductionBreakdown::from_claims(claims, self.caps, income.interest);

        let taxable_income = max(
            gross_income - standard_deduction_applied - deductions.total_allowed(),
            Decimal::ZERO,
        );

        let old = RegimeCalculator::new(self.old_schedule).compute(taxable_income)?;
        let new = RegimeCalculator::new(self.new_schedule).compute(taxable_income)?;

        Ok(AssessmentResult {
            gross_income,
            standard_deduction_applied,
            deductions,
            taxable_income,
            old,
            new,
        })
    }
}
