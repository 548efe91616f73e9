use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual income declared by the filer, split by source.
///
/// All amounts are rupees per assessment year and are expected to be
/// non-negative; blank form fields are coerced to zero before they reach
/// the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatement {
    pub salary: Decimal,
    pub rental: Decimal,
    pub business: Decimal,
    pub capital_gains: Decimal,
    pub interest: Decimal,
    pub other: Decimal,
}

impl IncomeStatement {
    /// Gross total income across all sources.
    pub fn total(&self) -> Decimal {
        self.salary + self.rental + self.business + self.capital_gains + self.interest + self.other
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn total_sums_all_sources() {
        let income = IncomeStatement {
            salary: dec!(800000),
            rental: dec!(120000),
            business: dec!(50000),
            capital_gains: dec!(10000),
            interest: dec!(8000),
            other: dec!(2000),
        };

        assert_eq!(income.total(), dec!(990000));
    }

    #[test]
    fn default_is_all_zero() {
        let income = IncomeStatement::default();

        assert_eq!(income.total(), Decimal::ZERO);
    }
}
