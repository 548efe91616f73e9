pub mod calculations;
pub mod checklist;
pub mod games;
pub mod models;

pub use calculations::{
    Assessment, AssessmentResult, DeductionBreakdown, RegimeCalculator, RegimeComputation,
    RiskProfileInput, RiskRecommendation, SectionCaps, TaxError, recommend,
};
pub use models::*;
