//! Scoring rules for the three kids' mini-games.
//!
//! Each game is a small in-memory state machine advanced by explicit
//! player actions. Generators take a caller-supplied [`rand::Rng`] so
//! sessions are reproducible under a seeded generator in tests.

pub mod coin_count;
pub mod quiz;
pub mod savings;

pub use coin_count::{CoinGame, CoinGameError, SubmitOutcome};
pub use quiz::{AnswerOutcome, Operation, Problem, QuizError, QuizSession};
pub use savings::{Choice, Expense, RoundFeedback, SavingsChallenge, SavingsError, SavingsOutcome};
