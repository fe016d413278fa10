//! Fixed-sequence participant.

use super::{Participant, ParticipantKind};
use crate::core::Result;
use crate::rules::{Move, RuleSet};

/// Replays a fixed list of moves, wrapping around at the end.
///
/// The script is played as given, so a move illegal in the current ruleset
/// reaches the resolver untouched.
///
/// ```
/// use dragon_wizard_knight::participants::{Participant, ParticipantKind, ScriptedPlayer};
/// use dragon_wizard_knight::rules::{Move, RuleSet};
///
/// let mut player = ScriptedPlayer::human(vec![Move::Dragon, Move::Knight]);
/// assert_eq!(player.choose_move(RuleSet::Standard).unwrap(), Move::Dragon);
/// assert_eq!(player.choose_move(RuleSet::Standard).unwrap(), Move::Knight);
/// assert_eq!(player.choose_move(RuleSet::Standard).unwrap(), Move::Dragon);
/// assert_eq!(player.kind(), ParticipantKind::Human);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedPlayer {
    moves: Vec<Move>,
    cursor: usize,
    kind: ParticipantKind,
}

impl ScriptedPlayer {
    /// Script a participant of the given kind.
    #[must_use]
    pub fn new(moves: Vec<Move>, kind: ParticipantKind) -> Self {
        assert!(!moves.is_empty(), "Script needs at least one move");
        Self {
            moves,
            cursor: 0,
            kind,
        }
    }

    /// Script standing in for the human.
    #[must_use]
    pub fn human(moves: Vec<Move>) -> Self {
        Self::new(moves, ParticipantKind::Human)
    }

    /// Script standing in for a computer opponent.
    #[must_use]
    pub fn computer(moves: Vec<Move>) -> Self {
        Self::new(moves, ParticipantKind::Computer)
    }

    /// Moves handed out so far.
    #[must_use]
    pub fn played(&self) -> usize {
        self.cursor
    }
}

impl Participant for ScriptedPlayer {
    fn kind(&self) -> ParticipantKind {
        self.kind
    }

    fn choose_move(&mut self, _ruleset: RuleSet) -> Result<Move> {
        let mv = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        Ok(mv)
    }
}
