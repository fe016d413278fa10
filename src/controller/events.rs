//! Controller collaborators and the events they receive.
//!
//! The controller never prints or reads anything itself. Setup answers come
//! from a `SetupInput`; everything that happens is reported to a
//! `GameObserver` as a `GameEvent`.

use serde::{Deserialize, Serialize};

use super::report::GameReport;
use crate::core::{GameError, Phase, PlayerId, Result, SetupError};
use crate::round::{RoundOutcome, SeatVec};
use crate::rules::{GameResult, Move, RuleSet};

/// Supplies setup answers.
///
/// Values are passed back raw; the controller validates them and asks again
/// when they are rejected.
pub trait SetupInput {
    /// The human's name.
    fn player_name(&mut self) -> Result<String>;

    /// Number of rounds to play in `phase`.
    fn rounds_total(&mut self, phase: Phase, player_name: &str) -> Result<i64>;
}

/// Receives game events, typically for display.
pub trait GameObserver {
    /// Handle one event.
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event.
impl GameObserver for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records every event, in order.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

/// Score snapshot row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Seat.
    pub player: PlayerId,
    /// Display name.
    pub name: String,
    /// Points at snapshot time.
    pub points: i64,
}

/// A move as revealed to everyone at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedMove {
    /// Seat.
    pub player: PlayerId,
    /// Display name.
    pub name: String,
    /// Move played.
    pub mv: Move,
}

/// Everything the controller reports.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// A setup answer was rejected and will be asked for again.
    SetupRejected {
        /// Why it was rejected.
        error: SetupError,
        /// Answers left before setup gives up.
        attempts_left: u32,
    },
    /// A phase begins.
    PhaseStarted {
        /// Phase starting.
        phase: Phase,
        /// Rounds to play.
        rounds_total: u32,
        /// Seated participants, at zero.
        roster: Vec<Standing>,
    },
    /// A round is about to collect moves.
    RoundStarted {
        /// Phase in progress.
        phase: Phase,
        /// 1-based round number.
        round: u32,
        /// Rounds in the phase.
        rounds_total: u32,
    },
    /// The human's move is not legal in the current ruleset.
    MoveRejected {
        /// Seat.
        player: PlayerId,
        /// Offending move.
        mv: Move,
        /// Ruleset in effect.
        ruleset: RuleSet,
        /// Attempts left before the move stands as a forfeit.
        attempts_left: u32,
    },
    /// All moves for a round are in.
    MovesRevealed {
        /// Phase in progress.
        phase: Phase,
        /// 1-based round number.
        round: u32,
        /// Rounds in the phase.
        rounds_total: u32,
        /// Moves in seat order.
        moves: SeatVec<RevealedMove>,
    },
    /// A round was resolved and scored.
    RoundResolved {
        /// Phase in progress.
        phase: Phase,
        /// 1-based round number.
        round: u32,
        /// Rounds in the phase.
        rounds_total: u32,
        /// Resolved outcome.
        outcome: RoundOutcome,
        /// Phase totals after this round.
        standings: Vec<Standing>,
        /// Tied rounds so far this phase.
        ties: u32,
    },
    /// A round could not be scored.
    RoundVoided {
        /// Phase in progress.
        phase: Phase,
        /// 1-based round number.
        round: u32,
        /// Why.
        error: GameError,
    },
    /// A phase ended.
    PhaseComplete {
        /// Phase that ended.
        phase: Phase,
        /// Phase verdict.
        result: GameResult,
        /// Final phase totals.
        standings: Vec<Standing>,
        /// Tied rounds in the phase.
        ties: u32,
    },
    /// The human won the standard game outright.
    BonusUnlocked,
    /// The human did not win the standard game outright.
    BonusSkipped,
    /// Terminal summary.
    GameFinished(GameReport),
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GameEvent::SetupRejected { .. } => "setup-rejected",
            GameEvent::PhaseStarted { .. } => "phase-started",
            GameEvent::RoundStarted { .. } => "round-started",
            GameEvent::MoveRejected { .. } => "move-rejected",
            GameEvent::MovesRevealed { .. } => "moves-revealed",
            GameEvent::RoundResolved { .. } => "round-resolved",
            GameEvent::RoundVoided { .. } => "round-voided",
            GameEvent::PhaseComplete { .. } => "phase-complete",
            GameEvent::BonusUnlocked => "bonus-unlocked",
            GameEvent::BonusSkipped => "bonus-skipped",
            GameEvent::GameFinished(_) => "game-finished",
        }
    }
}
