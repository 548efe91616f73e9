use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

use finplan_core::models::{Regime, RegimeSchedule, ScheduleError, TaxSlab};

/// Errors that can occur when loading slab schedule data.
#[derive(Debug, Error)]
pub enum SlabLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("failed to read schedule file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown regime code '{0}' (expected 'old' or 'new')")]
    UnknownRegime(String),

    #[error("no slab records for assessment year {assessment_year}, {regime} regime")]
    NoRecords {
        assessment_year: String,
        regime: Regime,
    },

    #[error("invalid schedule: {0}")]
    InvalidSchedule(#[from] ScheduleError),
}

impl From<csv::Error> for SlabLoaderError {
    fn from(err: csv::Error) -> Self {
        SlabLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a slab schedule CSV file.
///
/// The CSV uses named headers:
/// - `assessment_year`: e.g. `2024-25`
/// - `regime`: `old` or `new`
/// - `min_income`: the slab's exclusive lower bound
/// - `max_income`: the slab's inclusive upper bound (empty for open-ended)
/// - `base_tax`: tax accumulated over all lower slabs
/// - `rate`: the marginal rate as a decimal (e.g. `0.05` for 5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlabRecord {
    pub assessment_year: String,
    pub regime: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Regime-level parameters a slab CSV does not carry: the Section 87A
/// rebate, the cess rate, and the standard deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleParams {
    pub rebate_income_ceiling: Decimal,
    pub rebate_cap: Decimal,
    pub cess_rate: Decimal,
    pub standard_deduction: Decimal,
}

impl ScheduleParams {
    /// Assessment-year 2024-25 parameters for the given regime.
    pub fn fy_2024_25(regime: Regime) -> Self {
        match regime {
            Regime::Old => Self {
                rebate_income_ceiling: dec!(500000),
                rebate_cap: dec!(12500),
                cess_rate: dec!(0.04),
                standard_deduction: dec!(50000),
            },
            Regime::New => Self {
                rebate_income_ceiling: dec!(700000),
                rebate_cap: dec!(25000),
                cess_rate: dec!(0.04),
                standard_deduction: dec!(50000),
            },
        }
    }
}

/// Loader for slab schedule data from CSV files.
///
/// Parses CSV records and assembles them into validated
/// [`RegimeSchedule`] values; a schedule that is unsorted, gapped, or
/// bounded at the top is rejected rather than returned.
pub struct SlabLoader;

impl SlabLoader {
    /// Parse slab records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SlabRecord>, SlabLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: SlabRecord = result?;
            // Fail early on regime codes nothing downstream will match.
            if Regime::parse(&record.regime).is_none() {
                return Err(SlabLoaderError::UnknownRegime(record.regime));
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Assembles the slabs for one (assessment year, regime) pair into a
    /// validated schedule.
    ///
    /// Records for other years or regimes are ignored; the matching slabs
    /// are sorted by `min_income` before validation.
    pub fn build_schedule(
        records: &[SlabRecord],
        assessment_year: &str,
        regime: Regime,
        params: &ScheduleParams,
    ) -> Result<RegimeSchedule, SlabLoaderError> {
        let mut slabs: Vec<TaxSlab> = records
            .iter()
            .filter(|r| {
                r.assessment_year == assessment_year && Regime::parse(&r.regime) == Some(regime)
            })
            .map(|r| TaxSlab {
                min_income: r.min_income,
                max_income: r.max_income,
                rate: r.rate,
                base_tax: r.base_tax,
            })
            .collect();

        if slabs.is_empty() {
            return Err(SlabLoaderError::NoRecords {
                assessment_year: assessment_year.to_string(),
                regime,
            });
        }

        slabs.sort_by(|a, b| a.min_income.cmp(&b.min_income));

        let schedule = RegimeSchedule {
            assessment_year: assessment_year.to_string(),
            regime,
            slabs,
            rebate_income_ceiling: params.rebate_income_ceiling,
            rebate_cap: params.rebate_cap,
            cess_rate: params.cess_rate,
            standard_deduction: params.standard_deduction,
        };
        schedule.validate()?;

        Ok(schedule)
    }

    /// Reads a slab CSV from disk and builds both regime schedules for
    /// the given assessment year, using that year's default rebate and
    /// cess parameters.
    pub fn load_both_from_file(
        path: &Path,
        assessment_year: &str,
    ) -> Result<(RegimeSchedule, RegimeSchedule), SlabLoaderError> {
        let file = std::fs::File::open(path).map_err(|source| SlabLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records = Self::parse(file)?;

        let old = Self::build_schedule(
            &records,
            assessment_year,
            Regime::Old,
            &ScheduleParams::fy_2024_25(Regime::Old),
        )?;
        let new = Self::build_schedule(
            &records,
            assessment_year,
            Regime::New,
            &ScheduleParams::fy_2024_25(Regime::New),
        )?;

        Ok((old, new))
    }
}
