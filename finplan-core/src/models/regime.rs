use serde::{Deserialize, Serialize};

/// The two mutually exclusive Indian income-tax schedules a filer may
/// choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_codes() {
        assert_eq!(Regime::parse("old"), Some(Regime::Old));
        assert_eq!(Regime::parse("new"), Some(Regime::New));
        assert_eq!(Regime::parse(Regime::Old.as_str()), Some(Regime::Old));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(Regime::parse("OLD"), None);
        assert_eq!(Regime::parse(""), None);
    }
}
