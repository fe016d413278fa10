//! The pieces a participant can play.

use serde::{Deserialize, Serialize};

/// One of the discrete pieces played in a round.
///
/// `Druid` only exists in the bonus ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Breathes fire on knights.
    Dragon,
    /// Spellbinds dragons.
    Wizard,
    /// Cuts down wizards.
    Knight,
    /// Bonus-only wildcard with high-risk scoring.
    Druid,
}

impl Move {
    /// Every move, in display order.
    pub const ALL: [Move; 4] = [Move::Dragon, Move::Wizard, Move::Knight, Move::Druid];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Dragon => "Dragon",
            Move::Wizard => "Wizard",
            Move::Knight => "Knight",
            Move::Druid => "Druid",
        }
    }

    /// One-letter code typed at the console.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Move::Dragon => 'D',
            Move::Wizard => 'W',
            Move::Knight => 'K',
            Move::Druid => 'U',
        }
    }

    /// Look a move up by its letter code, case-insensitively.
    ///
    /// Whether the move is legal in the current ruleset is a separate question.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Move> {
        let upper = letter.to_ascii_uppercase();
        Move::ALL.into_iter().find(|mv| mv.letter() == upper)
    }

    /// Whether this move carries Druid scoring.
    #[must_use]
    pub const fn is_druid(self) -> bool {
        matches!(self, Move::Druid)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
