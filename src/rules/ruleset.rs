//! The beats-relation for each phase.
//!
//! Standard triangle: Dragon beats Knight, Knight beats Wizard, Wizard beats
//! Dragon. The bonus ruleset keeps the triangle and adds the Druid, who beats
//! the Dragon, falls to the Knight, and stands off against the Wizard.

use serde::{Deserialize, Serialize};

use super::moves::Move;
use crate::core::error::{GameError, Result};

const STANDARD_MOVES: [Move; 3] = [Move::Dragon, Move::Wizard, Move::Knight];
const BONUS_MOVES: [Move; 4] = [Move::Dragon, Move::Wizard, Move::Knight, Move::Druid];

/// Rule regime in effect for a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSet {
    /// Dragon / Wizard / Knight triangle.
    Standard,
    /// Triangle plus Druid.
    Bonus,
}

impl RuleSet {
    /// Moves a participant may play under this ruleset.
    #[must_use]
    pub const fn legal_moves(self) -> &'static [Move] {
        match self {
            RuleSet::Standard => &STANDARD_MOVES,
            RuleSet::Bonus => &BONUS_MOVES,
        }
    }

    /// Whether `mv` may be played under this ruleset.
    #[must_use]
    pub fn is_legal(self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Return `mv` if it is legal, `InvalidMove` otherwise.
    pub fn check(self, mv: Move) -> Result<Move> {
        if self.is_legal(mv) {
            Ok(mv)
        } else {
            Err(GameError::InvalidMove { mv, ruleset: self })
        }
    }

    /// Whether move `a` defeats move `b`.
    ///
    /// ```
    /// use dragon_wizard_knight::rules::{Move, RuleSet};
    ///
    /// assert!(RuleSet::Standard.beats(Move::Dragon, Move::Knight).unwrap());
    /// assert!(!RuleSet::Standard.beats(Move::Knight, Move::Dragon).unwrap());
    /// assert!(RuleSet::Standard.beats(Move::Druid, Move::Dragon).is_err());
    /// ```
    pub fn beats(self, a: Move, b: Move) -> Result<bool> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok(matches!(
            (a, b),
            (Move::Dragon, Move::Knight)
                | (Move::Knight, Move::Wizard)
                | (Move::Wizard, Move::Dragon)
                | (Move::Druid, Move::Dragon)
                | (Move::Knight, Move::Druid)
        ))
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSet::Standard => write!(f, "standard"),
            RuleSet::Bonus => write!(f, "bonus"),
        }
    }
}
