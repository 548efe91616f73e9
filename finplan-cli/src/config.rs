use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading the CLI config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional `finplan.toml` settings; command-line flags take precedence
/// over everything here.
///
/// ```toml
/// assessment_year = "2024-25"
/// schedule_file = "slabs.csv"
/// json = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Assessment year used when none is given on the command line.
    pub assessment_year: Option<String>,

    /// Slab schedule CSV to load instead of the built-in 2024-25 tables.
    pub schedule_file: Option<PathBuf>,

    /// Emit JSON by default instead of human-readable tables.
    pub json: Option<bool>,
}

impl CliConfig {
    /// Loads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// The assessment year to use, falling back to 2024-25.
    pub fn assessment_year(&self) -> &str {
        self.assessment_year.as_deref().unwrap_or("2024-25")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.assessment_year(), "2024-25");
    }

    #[test]
    fn full_config_parses() {
        let config: CliConfig = toml::from_str(
            r#"
            assessment_year = "2025-26"
            schedule_file = "slabs.csv"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.assessment_year(), "2025-26");
        assert_eq!(config.schedule_file, Some(PathBuf::from("slabs.csv")));
        assert_eq!(config.json, Some(true));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<CliConfig, _> = toml::from_str("regime = \"old\"\n");

        assert!(result.is_err());
    }
}
