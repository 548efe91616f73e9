//! Savings-challenge game: four spending decisions against an allowance.
//!
//! Each round presents one expense tagged necessary or unnecessary. The
//! player chooses to buy or to save; feedback reports whether the choice
//! matched the tag, but the ledger itself only cares about the choice:
//! buying always deducts the cost, saving never does, regardless of the
//! tag. After the fourth round the remaining balance is compared against
//! the savings goal.

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pocket money at the start of the challenge, in rupees.
pub const STARTING_ALLOWANCE: i64 = 200;

/// Savings needed at the end to meet the goal.
pub const SAVINGS_GOAL: i64 = 100;

/// Decisions per challenge.
pub const ROUNDS: usize = 4;

/// Errors from challenge actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SavingsError {
    /// All four rounds have been played.
    #[error("challenge is over; start a new challenge")]
    ChallengeOver,
}

/// One candidate expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub cost: i64,
    /// Whether the expense is something the player genuinely needs.
    pub necessary: bool,
}

/// The player's decision for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Buy,
    Save,
}

/// Feedback for one decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFeedback {
    pub expense: Expense,
    pub choice: Choice,
    /// Whether the choice matched the expense's tag (buy when necessary,
    /// save when unnecessary). Feedback only; the ledger ignores it.
    pub matched_tag: bool,
    /// Balance after the decision.
    pub balance: i64,
}

/// Final comparison against the savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsOutcome {
    pub savings: i64,
    pub goal: i64,
    pub goal_met: bool,
}

/// One four-round savings challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsChallenge {
    rounds: Vec<Expense>,
    current_round: usize,
    balance: i64,
}

impl SavingsChallenge {
    /// Starts a challenge with four expenses drawn from the built-in
    /// catalog without replacement.
    pub fn start<R: Rng>(rng: &mut R) -> Self {
        let mut pool = catalog();
        let mut rounds = Vec::with_capacity(ROUNDS);
        for _ in 0..ROUNDS {
            let index = rng.random_range(0..pool.len());
            rounds.push(pool.swap_remove(index));
        }
        Self::with_rounds(rounds)
    }

    /// Starts a challenge with a fixed expense sequence.
    pub fn with_rounds(rounds: Vec<Expense>) -> Self {
        Self {
            rounds,
            current_round: 0,
            balance: STARTING_ALLOWANCE,
        }
    }

    /// The expense the player is currently deciding on.
    pub fn current_expense(&self) -> Option<&Expense> {
        self.rounds.get(self.current_round)
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn is_over(&self) -> bool {
        self.current_round >= self.rounds.len()
    }

    /// Applies the player's decision for the current round.
    ///
    /// Buying deducts the cost unconditionally; whether the choice matched
    /// the tag only affects the feedback.
    pub fn choose(&mut self, choice: Choice) -> Result<RoundFeedback, SavingsError> {
        let expense = self
            .rounds
            .get(self.current_round)
            .ok_or(SavingsError::ChallengeOver)?
            .clone();
        self.current_round += 1;

        if choice == Choice::Buy {
            self.balance -= expense.cost;
        }

        let matched_tag = match choice {
            Choice::Buy => expense.necessary,
            Choice::Save => !expense.necessary,
        };

        Ok(RoundFeedback {
            expense,
            choice,
            matched_tag,
            balance: self.balance,
        })
    }

    /// The end-of-challenge comparison; `None` while rounds remain.
    pub fn outcome(&self) -> Option<SavingsOutcome> {
        if !self.is_over() {
            return None;
        }
        Some(SavingsOutcome {
            savings: self.balance,
            goal: SAVINGS_GOAL,
            goal_met: self.balance >= SAVINGS_GOAL,
        })
    }
}

/// Built-in expense catalog the rounds are drawn from.
fn catalog() -> Vec<Expense> {
    let entries: [(&str, i64, bool); 8] = [
        ("School notebook", 30, true),
        ("Bus fare for the week", 20, true),
        ("Water bottle replacement", 40, true),
        ("Pencil box refill", 25, true),
        ("Video game top-up", 60, false),
        ("Chocolate box", 35, false),
        ("Sticker collection", 25, false),
        ("Toy car", 50, false),
    ];
    entries
        .into_iter()
        .map(|(name, cost, necessary)| Expense {
            name: name.to_string(),
            cost,
            necessary,
        })
        .collect()
}
