use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal slab of a regime's rate schedule.
///
/// A slab covers taxable income `ti` where `ti > min_income` and
/// `ti <= max_income` (`max_income` of `None` means open-ended). Income
/// exactly at a slab boundary therefore belongs to the lower slab.
/// Tax within a slab is `base_tax + (ti - min_income) * rate`, where
/// `base_tax` is the full tax accumulated over all lower slabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxSlab {
    /// Whether `taxable_income` falls inside this slab.
    pub fn contains(&self, taxable_income: Decimal) -> bool {
        taxable_income > self.min_income
            && self
                .max_income
                .is_none_or(|max| taxable_income <= max)
    }
}
