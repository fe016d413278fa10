//! Point values per outcome.
//!
//! A standard win is worth `standard_win`; losing with a standard move costs
//! nothing. The Druid raises variance: winning with it pays `druid_win`,
//! losing with it costs `druid_loss`. Ties never move points.

use serde::{Deserialize, Serialize};

use crate::core::error::SetupError;
use crate::rules::Move;

/// Points awarded for a standard win.
pub const STANDARD_WIN: i64 = 1;

/// Points awarded for a Druid win.
pub const DRUID_WIN: i64 = 2;

/// Points applied to a participant whose Druid was beaten.
pub const DRUID_LOSS: i64 = -1;

/// Scoring constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Delta for winning with Dragon, Wizard or Knight.
    pub standard_win: i64,
    /// Delta for winning with the Druid.
    pub druid_win: i64,
    /// Delta for losing with the Druid.
    pub druid_loss: i64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            standard_win: STANDARD_WIN,
            druid_win: DRUID_WIN,
            druid_loss: DRUID_LOSS,
        }
    }
}

impl ScoringPolicy {
    /// Delta for the participant whose move won the round.
    #[must_use]
    pub fn win_points(&self, mv: Move) -> i64 {
        if mv.is_druid() {
            self.druid_win
        } else {
            self.standard_win
        }
    }

    /// Delta for a participant whose move was beaten.
    #[must_use]
    pub fn loss_points(&self, mv: Move) -> i64 {
        if mv.is_druid() {
            self.druid_loss
        } else {
            0
        }
    }

    /// Require `druid_win > standard_win > 0` and `druid_loss < 0`.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.standard_win <= 0 {
            return Err(SetupError::InvalidScoring(format!(
                "standard win must be positive, got {}",
                self.standard_win
            )));
        }
        if self.druid_win <= self.standard_win {
            return Err(SetupError::InvalidScoring(format!(
                "druid win ({}) must exceed standard win ({})",
                self.druid_win, self.standard_win
            )));
        }
        if self.druid_loss >= 0 {
            return Err(SetupError::InvalidScoring(format!(
                "druid loss must be negative, got {}",
                self.druid_loss
            )));
        }
        Ok(())
    }
}
