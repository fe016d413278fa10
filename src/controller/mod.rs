//! Game controller: the two-phase state machine.
//!
//! - `state`: controller states and the active phase
//! - `events`: collaborator traits and the events they receive
//! - `game`: the controller itself
//! - `report`: end-of-game summary

pub mod events;
pub mod game;
pub mod report;
pub mod state;

pub use events::{GameEvent, GameObserver, RevealedMove, SetupInput, Standing};
pub use game::{GameController, BONUS_OPPONENT_SEAT, STANDARD_OPPONENT_SEAT};
pub use report::{GameReport, PhaseSummary};
pub use state::{GamePhase, GameState};
