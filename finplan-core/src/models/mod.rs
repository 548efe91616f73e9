mod allocation;
mod deduction_claims;
mod income_statement;
mod regime;
mod regime_schedule;
mod slab;

pub use allocation::{AllocationBand, PortfolioAllocation};
pub use deduction_claims::DeductionClaims;
pub use income_statement::IncomeStatement;
pub use regime::Regime;
pub use regime_schedule::{RegimeSchedule, ScheduleError};
pub use slab::TaxSlab;
