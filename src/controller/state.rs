//! Controller states and the active phase.
//!
//! ```text
//! AwaitingSetup -> StandardRound(1..=n) -> StandardComplete
//!     -> [BonusRound(1..=m) -> BonusComplete] -> Finished
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Phase, PlayerId};
use crate::round::SeatVec;
use crate::rules::RuleSet;
use crate::scoring::ScoreKeeper;

/// Where the controller is in the game.
///
/// Round variants carry the 1-based number of the round about to be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for name and rounds-total.
    AwaitingSetup,
    /// Standard round `i` is next.
    StandardRound(u32),
    /// All standard rounds played; unlock check pending.
    StandardComplete,
    /// Bonus round `j` is next.
    BonusRound(u32),
    /// All bonus rounds played.
    BonusComplete,
    /// Terminal.
    Finished,
}

impl GameState {
    /// True once the game is over.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Finished)
    }
}

/// A contiguous block of rounds under one ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePhase {
    /// Which phase this is.
    pub phase: Phase,
    /// Seats taking part, human first.
    pub seats: SeatVec<PlayerId>,
    /// Rounds played so far.
    pub round: u32,
    /// Rounds to play.
    pub rounds_total: u32,
    /// Phase-scoped totals.
    pub scores: ScoreKeeper,
}

impl GamePhase {
    /// Start a phase with every seat at zero.
    ///
    /// Seats must be the contiguous range `0..seats.len()`.
    #[must_use]
    pub fn new(phase: Phase, seats: SeatVec<PlayerId>, rounds_total: u32) -> Self {
        debug_assert!(seats.iter().enumerate().all(|(i, p)| p.index() == i));
        debug_assert!(rounds_total > 0);
        let scores = ScoreKeeper::new(seats.len());
        Self {
            phase,
            seats,
            round: 0,
            rounds_total,
            scores,
        }
    }

    /// Ruleset in effect.
    #[must_use]
    pub fn ruleset(&self) -> RuleSet {
        self.phase.ruleset()
    }

    /// True when every round has been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round >= self.rounds_total
    }

    /// State to move to once the round counter has been advanced.
    #[must_use]
    pub fn next_state(&self) -> GameState {
        match (self.phase, self.is_complete()) {
            (Phase::Standard, false) => GameState::StandardRound(self.round + 1),
            (Phase::Standard, true) => GameState::StandardComplete,
            (Phase::Bonus, false) => GameState::BonusRound(self.round + 1),
            (Phase::Bonus, true) => GameState::BonusComplete,
        }
    }
}
