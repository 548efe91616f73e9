use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::regime::Regime;
use super::slab::TaxSlab;

/// Errors reported when a regime schedule fails structural validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule has no slabs at all.
    #[error("schedule for {0} regime has no slabs")]
    EmptySlabs(Regime),

    /// The first slab must start at zero income.
    #[error("first slab must start at 0, got {0}")]
    FirstSlabNotZero(Decimal),

    /// Slab N+1 must start exactly where slab N ends.
    #[error("slab gap: expected next slab to start at {expected}, got {found}")]
    SlabGap { expected: Decimal, found: Decimal },

    /// Only the final slab may be open-ended.
    #[error("non-final slab at index {0} is open-ended")]
    OpenSlabNotLast(usize),

    /// The final slab must be open-ended so every income matches a slab.
    #[error("final slab must be open-ended")]
    FinalSlabBounded,

    /// Marginal rates must lie in [0, 1].
    #[error("slab rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// Accumulated base tax cannot be negative.
    #[error("slab base tax must be non-negative, got {0}")]
    NegativeBaseTax(Decimal),

    /// The cess rate must lie in [0, 1].
    #[error("cess rate must be between 0 and 1, got {0}")]
    InvalidCessRate(Decimal),

    /// Rebate parameters must be non-negative.
    #[error("rebate parameters must be non-negative, got ceiling {ceiling}, cap {cap}")]
    InvalidRebate { ceiling: Decimal, cap: Decimal },

    /// The standard deduction must be non-negative.
    #[error("standard deduction must be non-negative, got {0}")]
    NegativeStandardDeduction(Decimal),
}

/// A complete rate-and-rebate schedule for one regime and assessment year.
///
/// Bundles the marginal slabs with the Section 87A rebate parameters, the
/// health-and-education cess rate, and the salaried standard deduction.
/// Slabs must be sorted, contiguous from zero, and end in a single
/// open-ended slab; [`RegimeSchedule::validate`] enforces this and the
/// calculators call it before computing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeSchedule {
    /// Assessment year label, e.g. `"2024-25"`.
    pub assessment_year: String,
    pub regime: Regime,
    pub slabs: Vec<TaxSlab>,
    /// Taxable income at or below which the Section 87A rebate applies.
    pub rebate_income_ceiling: Decimal,
    /// Maximum tax waived by the rebate.
    pub rebate_cap: Decimal,
    /// Flat surcharge applied on top of computed income tax (0.04 = 4%).
    pub cess_rate: Decimal,
    /// Standard deduction available against salary income.
    pub standard_deduction: Decimal,
}

impl RegimeSchedule {
    /// Old-regime schedule for assessment year 2024-25.
    ///
    /// Slabs: nil to 2.5L, 5% to 5L, 20% to 10L, 30% above. Rebate of up
    /// to 12,500 for taxable income up to 5L.
    pub fn fy_2024_25_old() -> Self {
        Self {
            assessment_year: "2024-25".to_string(),
            regime: Regime::Old,
            slabs: vec![
                TaxSlab {
                    min_income: dec!(0),
                    max_income: Some(dec!(250000)),
                    rate: dec!(0),
                    base_tax: dec!(0),
                },
                TaxSlab {
                    min_income: dec!(250000),
                    max_income: Some(dec!(500000)),
                    rate: dec!(0.05),
                    base_tax: dec!(0),
                },
                TaxSlab {
                    min_income: dec!(500000),
                    max_income: Some(dec!(1000000)),
                    rate: dec!(0.20),
                    base_tax: dec!(12500),
                },
                TaxSlab {
                    min_income: dec!(1000000),
                    max_income: None,
                    rate: dec!(0.30),
                    base_tax: dec!(112500),
                },
            ],
            rebate_income_ceiling: dec!(500000),
            rebate_cap: dec!(12500),
            cess_rate: dec!(0.04),
            standard_deduction: dec!(50000),
        }
    }

    /// New-regime schedule for assessment year 2024-25.
    ///
    /// Slabs: nil to 3L, then 5/10/15/20% in 3L steps to 15L, 30% above.
    /// Rebate of up to 25,000 for taxable income up to 7L.
    pub fn fy_2024_25_new() -> Self {
        Self {
            assessment_year: "2024-25".to_string(),
            regime: Regime::New,
            slabs: vec![
                TaxSlab {
                    min_income: dec!(0),
                    max_income: Some(dec!(300000)),
                    rate: dec!(0),
                    base_tax: dec!(0),
                },
                TaxSlab {
                    min_income: dec!(300000),
                    max_income: Some(dec!(600000)),
                    rate: dec!(0.05),
                    base_tax: dec!(0),
                },
                TaxSlab {
                    min_income: dec!(600000),
                    max_income: Some(dec!(900000)),
                    rate: dec!(0.10),
                    base_tax: dec!(15000),
                },
                TaxSlab {
                    min_income: dec!(900000),
                    max_income: Some(dec!(1200000)),
                    rate: dec!(0.15),
                    base_tax: dec!(45000),
                },
                TaxSlab {
                    min_income: dec!(1200000),
                    max_income: Some(dec!(1500000)),
                    rate: dec!(0.20),
                    base_tax: dec!(90000),
                },
                TaxSlab {
                    min_income: dec!(1500000),
                    max_income: None,
                    rate: dec!(0.30),
                    base_tax: dec!(150000),
                },
            ],
            rebate_income_ceiling: dec!(700000),
            rebate_cap: dec!(25000),
            cess_rate: dec!(0.04),
            standard_deduction: dec!(50000),
        }
    }

    /// Finds the slab covering `taxable_income`, if any.
    pub fn slab_for(&self, taxable_income: Decimal) -> Option<&TaxSlab> {
        self.slabs.iter().find(|s| s.contains(taxable_income))
    }

    /// Validates the structural invariants of the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the slab list is empty, unsorted,
    /// non-contiguous, bounded at the top, or carries out-of-range rates,
    /// or if the rebate, cess, or standard-deduction parameters are
    /// out of range.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let Some(first) = self.slabs.first() else {
            return Err(ScheduleError::EmptySlabs(self.regime));
        };
        if first.min_income != Decimal::ZERO {
            return Err(ScheduleError::FirstSlabNotZero(first.min_income));
        }

        let last_index = self.slabs.len() - 1;
        let mut expected_min = Decimal::ZERO;
        for (i, slab) in self.slabs.iter().enumerate() {
            if slab.min_income != expected_min {
                return Err(ScheduleError::SlabGap {
                    expected: expected_min,
                    found: slab.min_income,
                });
            }
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate(slab.rate));
            }
            if slab.base_tax < Decimal::ZERO {
                return Err(ScheduleError::NegativeBaseTax(slab.base_tax));
            }
            match slab.max_income {
                Some(max) => {
                    if i == last_index {
                        return Err(ScheduleError::FinalSlabBounded);
                    }
                    expected_min = max;
                }
                None => {
                    if i != last_index {
                        return Err(ScheduleError::OpenSlabNotLast(i));
                    }
                }
            }
        }

        if self.cess_rate < Decimal::ZERO || self.cess_rate > Decimal::ONE {
            return Err(ScheduleError::InvalidCessRate(self.cess_rate));
        }
        if self.rebate_income_ceiling < Decimal::ZERO || self.rebate_cap < Decimal::ZERO {
            return Err(ScheduleError::InvalidRebate {
                ceiling: self.rebate_income_ceiling,
                cap: self.rebate_cap,
            });
        }
        if self.standard_deduction < Decimal::ZERO {
            return Err(ScheduleError::NegativeStandardDeduction(
                self.standard_deduction,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn builtin_schedules_are_valid() {
        assert_eq!(RegimeSchedule::fy_2024_25_old().validate(), Ok(()));
        assert_eq!(RegimeSchedule::fy_2024_25_new().validate(), Ok(()));
    }

    #[test]
    fn empty_slabs_rejected() {
        let mut schedule = RegimeSchedule::fy_2024_25_old();
        schedule.slabs.clear();

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::EmptySlabs(Regime::Old))
        );
    }

    #[test]
    fn gapped_slabs_rejected() {
        let mut schedule = RegimeSchedule::fy_2024_25_old();
        schedule.slabs[1].min_income = dec!(300000);

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::SlabGap {
                expected: dec!(250000),
                found: dec!(300000),
            })
        );
    }

    #[test]
    fn bounded_final_slab_rejected() {
        let mut schedule = RegimeSchedule::fy_2024_25_new();
        schedule.slabs.last_mut().unwrap().max_income = Some(dec!(5000000));

        assert_eq!(schedule.validate(), Err(ScheduleError::FinalSlabBounded));
    }

    #[test]
    fn open_middle_slab_rejected() {
        let mut schedule = RegimeSchedule::fy_2024_25_old();
        schedule.slabs[1].max_income = None;

        assert_eq!(schedule.validate(), Err(ScheduleError::OpenSlabNotLast(1)));
    }

    #[test]
    fn out_of_range_rate_rejected() {
        let mut schedule = RegimeSchedule::fy_2024_25_old();
        schedule.slabs[2].rate = dec!(1.5);

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::InvalidRate(dec!(1.5)))
        );
    }

    #[test]
    fn slab_for_picks_lower_slab_at_boundary() {
        let schedule = RegimeSchedule::fy_2024_25_old();

        let slab = schedule.slab_for(dec!(500000)).unwrap();
        assert_eq!(slab.rate, dec!(0.05));

        let slab = schedule.slab_for(dec!(500001)).unwrap();
        assert_eq!(slab.rate, dec!(0.20));
    }
}
