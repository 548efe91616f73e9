use serde::{Deserialize, Serialize};

/// Recommended split of an investment portfolio, in whole percentage
/// points. Each triple sums to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub equity_pct: u8,
    pub debt_pct: u8,
    pub alternatives_pct: u8,
}

/// The five discrete allocation recommendations a risk score maps to.
///
/// Score thresholds are checked top-down; the first band whose threshold
/// the score meets wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationBand {
    Aggressive,
    ModerateAggressive,
    Moderate,
    ConservativeModerate,
    Conservative,
}

impl AllocationBand {
    /// Maps a 1-10 risk score to its band.
    pub fn for_score(score: u8) -> Self {
        if score >= 8 {
            Self::Aggressive
        } else if score >= 6 {
            Self::ModerateAggressive
        } else if score >= 4 {
            Self::Moderate
        } else if score >= 2 {
            Self::ConservativeModerate
        } else {
            Self::Conservative
        }
    }

    /// The fixed equity/debt/alternatives split for this band.
    pub fn allocation(&self) -> PortfolioAllocation {
        let (equity_pct, debt_pct, alternatives_pct) = match self {
            Self::Aggressive => (70, 20, 10),
            Self::ModerateAggressive => (60, 30, 10),
            Self::Moderate => (50, 40, 10),
            Self::ConservativeModerate => (30, 60, 10),
            Self::Conservative => (20, 70, 10),
        };
        PortfolioAllocation {
            equity_pct,
            debt_pct,
            alternatives_pct,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aggressive => "Aggressive",
            Self::ModerateAggressive => "Moderate-Aggressive",
            Self::Moderate => "Moderate",
            Self::ConservativeModerate => "Conservative-Moderate",
            Self::Conservative => "Conservative",
        }
    }
}

impl std::fmt::Display for AllocationBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn score_thresholds_map_top_down() {
        assert_eq!(AllocationBand::for_score(10), AllocationBand::Aggressive);
        assert_eq!(AllocationBand::for_score(8), AllocationBand::Aggressive);
        assert_eq!(
            AllocationBand::for_score(7),
            AllocationBand::ModerateAggressive
        );
        assert_eq!(
            AllocationBand::for_score(6),
            AllocationBand::ModerateAggressive
        );
        assert_eq!(AllocationBand::for_score(5), AllocationBand::Moderate);
        assert_eq!(AllocationBand::for_score(4), AllocationBand::Moderate);
        assert_eq!(
            AllocationBand::for_score(3),
            AllocationBand::ConservativeModerate
        );
        assert_eq!(
            AllocationBand::for_score(2),
            AllocationBand::ConservativeModerate
        );
        assert_eq!(AllocationBand::for_score(1), AllocationBand::Conservative);
        assert_eq!(AllocationBand::for_score(0), AllocationBand::Conservative);
    }

    #[test]
    fn every_allocation_sums_to_one_hundred() {
        for band in [
            AllocationBand::Aggressive,
            AllocationBand::ModerateAggressive,
            AllocationBand::Moderate,
            AllocationBand::ConservativeModerate,
            AllocationBand::Conservative,
        ] {
            let a = band.allocation();
            assert_eq!(
                a.equity_pct as u16 + a.debt_pct as u16 + a.alternatives_pct as u16,
                100,
                "allocation for {band} does not sum to 100"
            );
        }
    }

    #[test]
    fn aggressive_split_is_70_20_10() {
        let a = AllocationBand::Aggressive.allocation();

        assert_eq!(a.equity_pct, 70);
        assert_eq!(a.debt_pct, 20);
        assert_eq!(a.alternatives_pct, 10);
    }
}
