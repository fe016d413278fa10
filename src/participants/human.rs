//! Human-controlled participant.

use super::{Participant, ParticipantKind};
use crate::core::Result;
use crate::rules::{Move, RuleSet};

/// Source of the human's moves.
///
/// Implementations own parsing and validation: by the time a move is
/// returned it must be well formed. The engine does no string handling.
pub trait MoveInput {
    /// Block until the human picks a move for `ruleset`.
    fn request_move(&mut self, ruleset: RuleSet) -> Result<Move>;
}

impl<F> MoveInput for F
where
    F: FnMut(RuleSet) -> Result<Move>,
{
    fn request_move(&mut self, ruleset: RuleSet) -> Result<Move> {
        self(ruleset)
    }
}

/// The primary participant, playing both phases.
pub struct HumanPlayer<I> {
    input: I,
}

impl<I: MoveInput> HumanPlayer<I> {
    /// Wrap an input collaborator.
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: MoveInput> Participant for HumanPlayer<I> {
    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Human
    }

    fn choose_move(&mut self, ruleset: RuleSet) -> Result<Move> {
        self.input.request_move(ruleset)
    }
}
