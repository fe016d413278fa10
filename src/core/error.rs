//! Error types for the game engine.

use crate::rules::{Move, RuleSet};

/// Errors raised by the engine and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A move outside the ruleset's legal set reached the rules table or resolver.
    #[error("{mv} is not a legal move in the {ruleset} ruleset")]
    InvalidMove {
        /// The offending move.
        mv: Move,
        /// The ruleset in effect.
        ruleset: RuleSet,
    },

    /// Setup values were rejected.
    #[error("invalid setup: {0}")]
    Setup(#[from] SetupError),

    /// Setup kept failing past the configured retry bound.
    #[error("setup failed {attempts} times in a row, giving up")]
    SetupAttemptsExhausted {
        /// Number of attempts made.
        attempts: u32,
    },

    /// An input collaborator could not produce a value (closed terminal, etc).
    #[error("input unavailable: {0}")]
    Input(String),

    /// The engine reached a state its own invariants rule out.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// Reasons a setup value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The player name was empty or whitespace.
    #[error("player name must not be empty")]
    EmptyName,

    /// Rounds-total must be at least one.
    #[error("rounds total must be greater than zero, got {0}")]
    NonPositiveRounds(i64),

    /// Scoring constants break the high-risk/high-reward ordering.
    #[error("invalid scoring policy: {0}")]
    InvalidScoring(String),
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
