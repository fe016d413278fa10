//! Round submissions and outcomes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::rules::{Move, RuleSet};

/// Per-round list; rounds seat at most three participants.
pub type SeatVec<T> = SmallVec<[T; 3]>;

/// Whether an input collaborator checked the move before submitting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validation {
    /// Checked by a collaborator; an illegal move here forfeits the round.
    Checked,
    /// Nobody checked; an illegal move is reported as `InvalidMove`.
    Unchecked,
}

/// One participant's move for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Submission {
    /// Who played.
    pub player: PlayerId,
    /// What they played.
    pub mv: Move,
    /// How the move was obtained.
    pub validation: Validation,
}

impl Submission {
    /// A move that went through a validating collaborator.
    #[must_use]
    pub const fn checked(player: PlayerId, mv: Move) -> Self {
        Self {
            player,
            mv,
            validation: Validation::Checked,
        }
    }

    /// A move nobody validated.
    #[must_use]
    pub const fn unchecked(player: PlayerId, mv: Move) -> Self {
        Self {
            player,
            mv,
            validation: Validation::Unchecked,
        }
    }
}

/// Result of resolving one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Ruleset the round was played under.
    pub ruleset: RuleSet,
    /// Moves as submitted.
    pub submissions: SeatVec<Submission>,
    /// Sole winner, `None` for a tie.
    pub winner: Option<PlayerId>,
    /// Participants beaten this round (forfeits included).
    pub losers: SeatVec<PlayerId>,
    /// Participants who forfeited with an illegal move.
    pub forfeits: SeatVec<PlayerId>,
    /// Point delta for every submitting participant.
    pub deltas: SeatVec<(PlayerId, i64)>,
}

impl RoundOutcome {
    /// True when no participant won.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    /// Move the winner played.
    #[must_use]
    pub fn winning_move(&self) -> Option<Move> {
        let winner = self.winner?;
        self.move_of(winner)
    }

    /// Move a participant submitted this round.
    #[must_use]
    pub fn move_of(&self, player: PlayerId) -> Option<Move> {
        self.submissions
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.mv)
    }

    /// Delta for a participant (0 if they did not take part).
    #[must_use]
    pub fn delta_of(&self, player: PlayerId) -> i64 {
        self.deltas
            .iter()
            .find(|&&(p, _)| p == player)
            .map_or(0, |&(_, d)| d)
    }

    /// Whether a participant was beaten or forfeited.
    #[must_use]
    pub fn is_loser(&self, player: PlayerId) -> bool {
        self.losers.contains(&player)
    }
}
