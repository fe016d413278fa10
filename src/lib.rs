//! # dragon-wizard-knight
//!
//! Engine for "Dragon, Wizard, Knight", a three-way rock-paper-scissors
//! variant with a bonus round against two opponents and a fourth piece, the
//! Druid, that pays double on a win and costs a point on a loss.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: every score, seat and phase lives in the
//!    `GameController`; there are no globals.
//!
//! 2. **I/O at the edges**: moves and setup answers come from collaborator
//!    traits, results leave as `GameEvent`s. The engine never prints or parses.
//!
//! 3. **Fixed rules**: the beats-relation is a `match` table per ruleset.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors
//! - `rules`: moves, rulesets, verdicts
//! - `scoring`: scoring policy and per-phase totals
//! - `round`: round resolution
//! - `participants`: human, random and scripted move sources
//! - `controller`: the two-phase state machine
//! - `cli`: console collaborators (feature `cli`)

pub mod core;
pub mod rules;
pub mod scoring;
pub mod round;
pub mod participants;
pub mod controller;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Phase, PlayerId, PlayerMap, Result, SetupError};

pub use crate::rules::{GameResult, Move, RuleSet};

pub use crate::scoring::{ScoreKeeper, ScoringPolicy};

pub use crate::round::{RoundOutcome, RoundResolver, Submission, Validation};

pub use crate::participants::{
    HumanPlayer, MoveInput, Participant, ParticipantKind, RandomPlayer, ScriptedPlayer,
};

pub use crate::controller::{
    GameController, GameEvent, GameObserver, GamePhase, GameReport, GameState, PhaseSummary,
    SetupInput, Standing,
};
