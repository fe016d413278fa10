//! Move sources.
//!
//! Participants are trait-based so the controller never cares where a move
//! comes from:
//! - `HumanPlayer`: asks a `MoveInput` collaborator (console, script, ...)
//! - `RandomPlayer`: uniform choice over the ruleset's legal moves
//! - `ScriptedPlayer`: replays a fixed sequence, for tests and simulations
//!
//! Computer sources must hand back a move that is legal in the requested
//! ruleset. Human moves are checked by the controller and asked for again.

pub mod human;
pub mod random;
pub mod scripted;

pub use human::{HumanPlayer, MoveInput};
pub use random::RandomPlayer;
pub use scripted::ScriptedPlayer;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::rules::{Move, RuleSet};

/// Who is behind a participant's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantKind {
    /// Moves typed by a person; a rejected move is asked for again.
    Human,
    /// Moves picked by the program; a rejected move is a bug.
    Computer,
}

/// Produces one move per round.
pub trait Participant {
    /// Kind of move source.
    fn kind(&self) -> ParticipantKind;

    /// Pick a move for the coming round under `ruleset`.
    ///
    /// Errors only when the underlying collaborator cannot answer at all.
    fn choose_move(&mut self, ruleset: RuleSet) -> Result<Move>;
}

impl<P: Participant + ?Sized> Participant for Box<P> {
    fn kind(&self) -> ParticipantKind {
        (**self).kind()
    }

    fn choose_move(&mut self, ruleset: RuleSet) -> Result<Move> {
        (**self).choose_move(ruleset)
    }
}
