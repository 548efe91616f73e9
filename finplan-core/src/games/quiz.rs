//! Arithmetic quiz: five questions, coins awarded at the end.
//!
//! Problems are one of three kinds with bounded operands so every answer
//! is a small non-negative number:
//!
//! | Kind     | Operands |
//! |----------|----------|
//! | Add      | 1-50 + 1-50 |
//! | Subtract | minuend 20-69, subtrahend 1 to minuend-1 |
//! | Multiply | 1-10 × 1-10 |
//!
//! Fifty coins per correct answer, paid out when the session ends; there
//! is no per-question payout.

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Questions per session.
pub const QUESTIONS_PER_SESSION: u32 = 5;

/// Coins earned per correct answer.
pub const COINS_PER_CORRECT: u32 = 50;

/// Errors from quiz actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// `submit` was called with no generated problem outstanding.
    #[error("no active problem; call next_problem first")]
    NoActiveProblem,

    /// All five questions have been answered.
    #[error("session is over; start a new session")]
    SessionOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

/// One quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub a: u32,
    pub b: u32,
    pub operation: Operation,
}

impl Problem {
    /// Generates a problem with a uniformly chosen kind and bounded
    /// operands.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let operation = match rng.random_range(0..3) {
            0 => Operation::Add,
            1 => Operation::Subtract,
            _ => Operation::Multiply,
        };
        let (a, b) = match operation {
            Operation::Add => (rng.random_range(1..=50), rng.random_range(1..=50)),
            Operation::Subtract => {
                let minuend = rng.random_range(20..=69);
                (minuend, rng.random_range(1..minuend))
            }
            Operation::Multiply => (rng.random_range(1..=10), rng.random_range(1..=10)),
        };
        Self { a, b, operation }
    }

    /// The expected answer; always non-negative by construction.
    pub fn answer(&self) -> u32 {
        match self.operation {
            Operation::Add => self.a + self.b,
            Operation::Subtract => self.a - self.b,
            Operation::Multiply => self.a * self.b,
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self.operation {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
        };
        write!(f, "{} {} {}", self.a, symbol, self.b)
    }
}

/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The expected answer, for feedback on a miss.
    pub expected: u32,
}

/// One five-question quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    current: Option<Problem>,
    asked: u32,
    correct: u32,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            current: None,
            asked: 0,
            correct: 0,
        }
    }

    /// Generates and stores the next question, or returns `None` once all
    /// five have been asked.
    pub fn next_problem<R: Rng>(&mut self, rng: &mut R) -> Option<Problem> {
        if self.asked >= QUESTIONS_PER_SESSION || self.current.is_some() {
            return None;
        }
        let problem = Problem::generate(rng);
        self.current = Some(problem);
        self.asked += 1;
        Some(problem)
    }

    /// Checks the player's answer against the outstanding question.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoActiveProblem`] when no question is
    /// outstanding, or [`QuizError::SessionOver`] once the session has
    /// finished.
    pub fn submit(&mut self, answer: u32) -> Result<AnswerOutcome, QuizError> {
        if self.is_over() {
            return Err(QuizError::SessionOver);
        }
        let problem = self.current.take().ok_or(QuizError::NoActiveProblem)?;
        let expected = problem.answer();
        let correct = answer == expected;
        if correct {
            self.correct += 1;
        }
        Ok(AnswerOutcome { correct, expected })
    }

    pub fn is_over(&self) -> bool {
        self.asked >= QUESTIONS_PER_SESSION && self.current.is_none()
    }

    pub fn questions_asked(&self) -> u32 {
        self.asked
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct
    }

    /// End-of-session payout: fifty coins per correct answer.
    pub fn coins_earned(&self) -> u32 {
        self.correct * COINS_PER_CORRECT
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn generated_operands_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let problem = Problem::generate(&mut rng);
            match problem.operation {
                Operation::Add => {
                    assert!((1..=50).contains(&problem.a));
                    assert!((1..=50).contains(&problem.b));
                }
                Operation::Subtract => {
                    assert!((20..=69).contains(&problem.a));
                    assert!(problem.b >= 1 && problem.b < problem.a);
                }
                Operation::Multiply => {
                    assert!((1..=10).contains(&problem.a));
                    assert!((1..=10).contains(&problem.b));
                }
            }
        }
    }

    #[test]
    fn subtraction_answers_are_positive() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let problem = Problem::generate(&mut rng);
            if problem.operation == Operation::Subtract {
                assert!(problem.answer() >= 1);
            }
        }
    }

    #[test]
    fn session_asks_exactly_five_questions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new();

        for _ in 0..QUESTIONS_PER_SESSION {
            let problem = session.next_problem(&mut rng).unwrap();
            session.submit(problem.answer()).unwrap();
        }

        assert!(session.is_over());
        assert_eq!(session.next_problem(&mut rng), None);
        assert_eq!(session.submit(0), Err(QuizError::SessionOver));
    }

    #[test]
    fn coins_are_fifty_per_correct_answer() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new();

        // Answer three correctly, two wrong (off by one is always wrong
        // since every answer is exact).
        for i in 0..QUESTIONS_PER_SESSION {
            let problem = session.next_problem(&mut rng).unwrap();
            let answer = if i < 3 {
                problem.answer()
            } else {
                problem.answer() + 1
            };
            session.submit(answer).unwrap();
        }

        assert_eq!(session.correct_answers(), 3);
        assert_eq!(session.coins_earned(), 150);
    }

    #[test]
    fn submit_without_a_problem_is_an_error() {
        let mut session = QuizSession::new();

        assert_eq!(session.submit(42), Err(QuizError::NoActiveProblem));
    }

    #[test]
    fn next_problem_does_not_skip_an_unanswered_question() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = QuizSession::new();

        let first = session.next_problem(&mut rng).unwrap();
        // A second request while the first is outstanding yields nothing.
        assert_eq!(session.next_problem(&mut rng), None);

        session.submit(first.answer()).unwrap();
        assert!(session.next_problem(&mut rng).is_some());
    }
}
