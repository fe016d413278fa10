//! Core engine types: participants, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module leans on.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{validate_name, validate_rounds, GameConfig, Phase};
pub use error::{GameError, Result, SetupError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
