pub mod risk;
pub mod schedule;
pub mod tax;

pub use risk::RiskArgs;
pub use schedule::ScheduleArgs;
pub use tax::TaxArgs;

use anyhow::{Context, Result};
use finplan_core::models::RegimeSchedule;
use finplan_data::SlabLoader;

use crate::config::CliConfig;

/// Resolves the two regime schedules: loaded from the configured CSV when
/// one is set, the built-in 2024-25 tables otherwise.
fn resolve_schedules(config: &CliConfig) -> Result<(RegimeSchedule, RegimeSchedule)> {
    match &config.schedule_file {
        Some(path) => SlabLoader::load_both_from_file(path, config.assessment_year())
            .with_context(|| format!("failed to load schedules from {}", path.display())),
        None => Ok((
            RegimeSchedule::fy_2024_25_old(),
            RegimeSchedule::fy_2024_25_new(),
        )),
    }
}
