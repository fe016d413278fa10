//! Game configuration.
//!
//! Everything the controller would otherwise ask for interactively can be
//! preset here. Values left as `None` are requested from the setup
//! collaborator when the game reaches them.
//!
//! ```
//! use dragon_wizard_knight::core::GameConfig;
//!
//! let config = GameConfig::new()
//!     .with_seed(7)
//!     .with_player_name("Ada")
//!     .with_standard_rounds(5);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.bonus_rounds, None);
//! ```

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use crate::rules::RuleSet;
use crate::scoring::ScoringPolicy;

/// Default name of the standard-phase opponent.
pub const DEFAULT_STANDARD_OPPONENT: &str = "Sally";

/// Default name of the extra bonus-phase opponent.
pub const DEFAULT_BONUS_OPPONENT: &str = "Bob";

/// Default bound on consecutive rejected setup answers.
pub const DEFAULT_MAX_SETUP_ATTEMPTS: u32 = 3;

/// Default bound on consecutive rejected human moves within one round.
pub const DEFAULT_MAX_MOVE_ATTEMPTS: u32 = 3;

/// A contiguous block of rounds played under one ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Human against one opponent, standard triangle.
    Standard,
    /// Human against two opponents, Druid enabled.
    Bonus,
}

impl Phase {
    /// The ruleset in effect during this phase.
    #[must_use]
    pub const fn ruleset(self) -> RuleSet {
        match self {
            Phase::Standard => RuleSet::Standard,
            Phase::Bonus => RuleSet::Bonus,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Standard => write!(f, "standard game"),
            Phase::Bonus => write!(f, "bonus game"),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Preset human name; prompted when `None`.
    pub player_name: Option<String>,

    /// Preset standard rounds-total; prompted when `None`.
    pub standard_rounds: Option<u32>,

    /// Preset bonus rounds-total; prompted at unlock time when `None`.
    pub bonus_rounds: Option<u32>,

    /// Name of the standard-phase opponent.
    pub standard_opponent: String,

    /// Name of the opponent that joins for the bonus phase.
    pub bonus_opponent: String,

    /// Point deltas per outcome.
    pub scoring: ScoringPolicy,

    /// Consecutive rejected setup answers tolerated before giving up.
    pub max_setup_attempts: u32,

    /// Consecutive rejected human moves tolerated before the move is forfeited.
    pub max_move_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: None,
            standard_rounds: None,
            bonus_rounds: None,
            standard_opponent: DEFAULT_STANDARD_OPPONENT.to_string(),
            bonus_opponent: DEFAULT_BONUS_OPPONENT.to_string(),
            scoring: ScoringPolicy::default(),
            max_setup_attempts: DEFAULT_MAX_SETUP_ATTEMPTS,
            max_move_attempts: DEFAULT_MAX_MOVE_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (everything prompted, random seed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset the human's name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Preset the standard rounds-total.
    #[must_use]
    pub fn with_standard_rounds(mut self, rounds: u32) -> Self {
        self.standard_rounds = Some(rounds);
        self
    }

    /// Preset the bonus rounds-total.
    #[must_use]
    pub fn with_bonus_rounds(mut self, rounds: u32) -> Self {
        self.bonus_rounds = Some(rounds);
        self
    }

    /// Rename the opponents.
    #[must_use]
    pub fn with_opponents(mut self, standard: impl Into<String>, bonus: impl Into<String>) -> Self {
        self.standard_opponent = standard.into();
        self.bonus_opponent = bonus.into();
        self
    }

    /// Override the scoring constants.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the setup retry bound.
    #[must_use]
    pub fn with_max_setup_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Need at least one setup attempt");
        self.max_setup_attempts = attempts;
        self
    }

    /// Set the per-round human move retry bound.
    #[must_use]
    pub fn with_max_move_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Need at least one move attempt");
        self.max_move_attempts = attempts;
        self
    }

    /// Rounds-total preset for a phase, if any.
    #[must_use]
    pub fn rounds_for(&self, phase: Phase) -> Option<u32> {
        match phase {
            Phase::Standard => self.standard_rounds,
            Phase::Bonus => self.bonus_rounds,
        }
    }

    /// Check every preset value.
    pub fn validate(&self) -> Result<(), SetupError> {
        if let Some(name) = &self.player_name {
            validate_name(name)?;
        }
        validate_name(&self.standard_opponent)?;
        validate_name(&self.bonus_opponent)?;
        for rounds in [self.standard_rounds, self.bonus_rounds].into_iter().flatten() {
            validate_rounds(i64::from(rounds))?;
        }
        self.scoring.validate()
    }
}

/// Trim and accept a participant name.
pub fn validate_name(raw: &str) -> Result<String, SetupError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SetupError::EmptyName);
    }
    Ok(name.to_string())
}

/// Accept a rounds-total if it is a positive count.
pub fn validate_rounds(raw: i64) -> Result<u32, SetupError> {
    match u32::try_from(raw) {
        Ok(rounds) if rounds > 0 => Ok(rounds),
        _ => Err(SetupError::NonPositiveRounds(raw)),
    }
}
