//! Round resolution.
//!
//! A participant wins a round only if their move beats every other legal
//! move submitted that round. With two participants this is the familiar
//! duel; with three or more it means cycles, standoffs and duplicated
//! winning moves all end in a tie.
//!
//! ## Example
//!
//! ```
//! use dragon_wizard_knight::core::PlayerId;
//! use dragon_wizard_knight::round::{RoundResolver, Submission};
//! use dragon_wizard_knight::rules::{Move, RuleSet};
//!
//! let resolver = RoundResolver::default();
//! let (you, sally) = (PlayerId::new(0), PlayerId::new(1));
//!
//! let outcome = resolver
//!     .resolve(
//!         &[Submission::checked(you, Move::Dragon), Submission::checked(sally, Move::Knight)],
//!         RuleSet::Standard,
//!     )
//!     .unwrap();
//!
//! assert_eq!(outcome.winner, Some(you));
//! assert_eq!(outcome.delta_of(you), 1);
//! assert_eq!(outcome.delta_of(sally), 0);
//! ```

use log::{debug, warn};

use super::outcome::{RoundOutcome, SeatVec, Submission, Validation};
use crate::core::error::{GameError, Result};
use crate::rules::RuleSet;
use crate::scoring::ScoringPolicy;

/// Stateless round resolver.
///
/// Holds only the scoring constants used to fill in deltas; resolving the
/// same submissions twice always yields the same outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundResolver {
    scoring: ScoringPolicy,
}

impl RoundResolver {
    /// Create a resolver with the given scoring constants.
    #[must_use]
    pub fn new(scoring: ScoringPolicy) -> Self {
        Self { scoring }
    }

    /// Resolve one round.
    ///
    /// Illegal checked moves forfeit; an illegal unchecked move aborts with
    /// `InvalidMove` and nothing is scored.
    pub fn resolve(&self, submissions: &[Submission], ruleset: RuleSet) -> Result<RoundOutcome> {
        let mut live: SeatVec<Submission> = SeatVec::new();
        let mut forfeits: SeatVec<_> = SeatVec::new();

        for submission in submissions {
            if ruleset.is_legal(submission.mv) {
                live.push(*submission);
                continue;
            }
            match submission.validation {
                Validation::Checked => {
                    warn!(
                        "{} forfeits with {} under the {} ruleset",
                        submission.player, submission.mv, ruleset
                    );
                    forfeits.push(submission.player);
                }
                Validation::Unchecked => {
                    return Err(GameError::InvalidMove {
                        mv: submission.mv,
                        ruleset,
                    });
                }
            }
        }

        let winner = match live.len() {
            0 => None,
            1 if !forfeits.is_empty() => Some(live[0]),
            1 => None,
            _ => self.dominant(&live, ruleset)?,
        };

        let mut losers: SeatVec<_> = SeatVec::new();
        let mut deltas: SeatVec<_> = SeatVec::new();
        for submission in &live {
            let delta = match winner {
                Some(w) if w.player == submission.player => self.scoring.win_points(submission.mv),
                Some(_) => {
                    losers.push(submission.player);
                    self.scoring.loss_points(submission.mv)
                }
                None => 0,
            };
            deltas.push((submission.player, delta));
        }
        for &player in &forfeits {
            losers.push(player);
            deltas.push((player, 0));
        }

        let outcome = RoundOutcome {
            ruleset,
            submissions: submissions.iter().copied().collect(),
            winner: winner.map(|w| w.player),
            losers,
            forfeits,
            deltas,
        };
        debug!(
            "resolved {} round: winner={:?} deltas={:?}",
            ruleset, outcome.winner, outcome.deltas
        );
        Ok(outcome)
    }

    /// The submission whose move beats every other live move, if any.
    fn dominant(&self, live: &[Submission], ruleset: RuleSet) -> Result<Option<Submission>> {
        for (i, candidate) in live.iter().enumerate() {
            let mut beats_all = true;
            for (j, other) in live.iter().enumerate() {
                if i != j && !ruleset.beats(candidate.mv, other.mv)? {
                    beats_all = false;
                    break;
                }
            }
            if beats_all {
                return Ok(Some(*candidate));
            }
        }
        Ok(None)
    }
}
