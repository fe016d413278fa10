//! Uniform random opponent.

use super::{Participant, ParticipantKind};
use crate::core::{GameError, GameRng, Result};
use crate::rules::{Move, RuleSet};

/// Computer opponent picking uniformly from the legal moves.
///
/// Each round is sampled afresh; nothing about earlier rounds is kept.
/// Give every opponent its own stream (see `GameRng::fork`) so their choices
/// are independent.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create an opponent drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Participant for RandomPlayer {
    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Computer
    }

    fn choose_move(&mut self, ruleset: RuleSet) -> Result<Move> {
        self.rng
            .choose(ruleset.legal_moves())
            .copied()
            .ok_or(GameError::Internal("ruleset has no legal moves"))
    }
}
