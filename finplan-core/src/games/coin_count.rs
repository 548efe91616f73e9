//! Coin-counting game: assemble a target amount from coins and notes.
//!
//! The player increments and decrements denomination counts, then submits.
//! A submission matching the target wins the round; the score starts at
//! 200 and drops 20 per failed attempt, floored at 50. The third miss
//! reveals the target and ends the round.

use std::collections::BTreeMap;

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Denominations available to the player, in rupees.
pub const DENOMINATIONS: [u32; 6] = [1, 2, 5, 10, 20, 50];

/// Failed submissions allowed before the round is lost.
pub const MAX_ATTEMPTS: u32 = 3;

const BASE_SCORE: u32 = 200;
const MISS_PENALTY: u32 = 20;
const MIN_SCORE: u32 = 50;

/// Errors from coin-game actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoinGameError {
    /// Only the fixed rupee denominations exist.
    #[error("unknown denomination {0}")]
    UnknownDenomination(u32),

    /// The round already ended in a win or loss.
    #[error("round is over; start a new round")]
    RoundOver,
}

/// Result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The assembled amount matched the target.
    Won { score: u32 },
    /// Wrong amount; the round continues.
    Miss { attempts_left: u32 },
    /// Third miss; the target is revealed and the round ends.
    Lost { target: u32 },
}

/// One round of the coin-counting game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinGame {
    target: u32,
    counts: BTreeMap<u32, u32>,
    failed_attempts: u32,
    over: bool,
}

impl CoinGame {
    /// Starts a round against a fixed target amount.
    pub fn with_target(target: u32) -> Self {
        Self {
            target,
            counts: BTreeMap::new(),
            failed_attempts: 0,
            over: false,
        }
    }

    /// Starts a round against a random target between 10 and 99 rupees.
    pub fn random_round<R: Rng>(rng: &mut R) -> Self {
        Self::with_target(rng.random_range(10..=99))
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Adds one coin or note of the given denomination.
    pub fn add(&mut self, denomination: u32) -> Result<(), CoinGameError> {
        self.check_denomination(denomination)?;
        *self.counts.entry(denomination).or_insert(0) += 1;
        Ok(())
    }

    /// Removes one coin or note of the given denomination, if any are
    /// placed.
    pub fn remove(&mut self, denomination: u32) -> Result<(), CoinGameError> {
        self.check_denomination(denomination)?;
        if let Some(count) = self.counts.get_mut(&denomination) {
            *count = count.saturating_sub(1);
        }
        Ok(())
    }

    /// Total value of the coins placed so far.
    pub fn current_amount(&self) -> u32 {
        self.counts.iter().map(|(denom, count)| denom * count).sum()
    }

    /// Submits the assembled amount against the target.
    ///
    /// # Errors
    ///
    /// Returns [`CoinGameError::RoundOver`] once the round has been won
    /// or lost.
    pub fn submit(&mut self) -> Result<SubmitOutcome, CoinGameError> {
        if self.over {
            return Err(CoinGameError::RoundOver);
        }

        if self.current_amount() == self.target {
            self.over = true;
            return Ok(SubmitOutcome::Won {
                score: self.score(),
            });
        }

        self.failed_attempts += 1;
        if self.failed_attempts >= MAX_ATTEMPTS {
            self.over = true;
            Ok(SubmitOutcome::Lost {
                target: self.target,
            })
        } else {
            Ok(SubmitOutcome::Miss {
                attempts_left: MAX_ATTEMPTS - self.failed_attempts,
            })
        }
    }

    /// Win score: 200 minus 20 per failed attempt, never below 50.
    fn score(&self) -> u32 {
        BASE_SCORE
            .saturating_sub(self.failed_attempts * MISS_PENALTY)
            .max(MIN_SCORE)
    }

    fn check_denomination(&self, denomination: u32) -> Result<(), CoinGameError> {
        if DENOMINATIONS.contains(&denomination) {
            Ok(())
        } else {
            Err(CoinGameError::UnknownDenomination(denomination))
        }
    }
}
