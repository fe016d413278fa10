//! Per-phase point totals.

use log::error;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::round::RoundOutcome;
use crate::rules::GameResult;

/// Point totals for the participants of one phase.
///
/// The controller is the only mutator; it applies one outcome per round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    points: PlayerMap<i64>,
    ties: u32,
    rounds_scored: u32,
}

impl ScoreKeeper {
    /// Start every seat in `0..player_count` at zero.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            points: PlayerMap::with_value(player_count, 0),
            ties: 0,
            rounds_scored: 0,
        }
    }

    /// Add each outcome delta to its participant's total.
    pub fn apply_outcome(&mut self, outcome: &RoundOutcome) {
        for &(player, delta) in &outcome.deltas {
            match self.points.get_mut(player) {
                Some(points) => *points += delta,
                None => error!("outcome scores unseated {}", player),
            }
        }
        if outcome.is_tie() {
            self.ties += 1;
        }
        self.rounds_scored += 1;
    }

    /// Current total for a participant (0 if unseated).
    #[must_use]
    pub fn points(&self, player: PlayerId) -> i64 {
        self.points.get(player).copied().unwrap_or(0)
    }

    /// All totals.
    #[must_use]
    pub fn totals(&self) -> &PlayerMap<i64> {
        &self.points
    }

    /// Rounds that ended without a winner.
    #[must_use]
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Rounds applied so far.
    #[must_use]
    pub fn rounds_scored(&self) -> u32 {
        self.rounds_scored
    }

    /// Verdict on the current totals.
    #[must_use]
    pub fn leaders(&self) -> Option<GameResult> {
        GameResult::from_points(self.points.iter().map(|(p, &pts)| (p, pts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{RoundResolver, Submission};
    use crate::rules::{Move, RuleSet};

    const YOU: PlayerId = PlayerId::new(0);
    const SALLY: PlayerId = PlayerId::new(1);
    const BOB: PlayerId = PlayerId::new(2);

    fn play(keeper: &mut ScoreKeeper, moves: &[(PlayerId, Move)], ruleset: RuleSet) {
        let submissions: Vec<_> = moves
            .iter()
            .map(|&(p, mv)| Submission::checked(p, mv))
            .collect();
        let outcome = RoundResolver::default().resolve(&submissions, ruleset).unwrap();
        keeper.apply_outcome(&outcome);
    }

    #[test]
    fn test_standard_win_and_tie() {
        let mut keeper = ScoreKeeper::new(2);
        play(&mut keeper, &[(YOU, Move::Dragon), (SALLY, Move::Knight)], RuleSet::Standard);
        play(&mut keeper, &[(YOU, Move::Wizard), (SALLY, Move::Wizard)], RuleSet::Standard);

        assert_eq!(keeper.points(YOU), 1);
        assert_eq!(keeper.points(SALLY), 0);
        assert_eq!(keeper.ties(), 1);
        assert_eq!(keeper.rounds_scored(), 2);
        assert_eq!(keeper.leaders(), Some(GameResult::Winner(YOU)));
    }

    #[test]
    fn test_druid_swings() {
        let mut keeper = ScoreKeeper::new(3);
        play(
            &mut keeper,
            &[(YOU, Move::Druid), (SALLY, Move::Dragon), (BOB, Move::Dragon)],
            RuleSet::Bonus,
        );
        play(
            &mut keeper,
            &[(YOU, Move::Druid), (SALLY, Move::Knight), (BOB, Move::Wizard)],
            RuleSet::Bonus,
        );

        // +2 for the first Druid win, -1 for the Druid falling to the Knight
        assert_eq!(keeper.points(YOU), 1);
        assert_eq!(keeper.points(SALLY), 1);
        assert_eq!(keeper.points(BOB), 0);
        assert_eq!(keeper.leaders(), Some(GameResult::Tie(vec![YOU, SALLY])));
    }

    #[test]
    fn test_cycle_leaves_scores_untouched() {
        let mut keeper = ScoreKeeper::new(3);
        play(
            &mut keeper,
            &[(YOU, Move::Dragon), (SALLY, Move::Knight), (BOB, Move::Wizard)],
            RuleSet::Bonus,
        );
        assert!(keeper.totals().iter().all(|(_, &p)| p == 0));
        assert_eq!(keeper.ties(), 1);
    }

    #[test]
    fn test_unseated_player_reads_zero() {
        let keeper = ScoreKeeper::new(2);
        assert_eq!(keeper.points(BOB), 0);
    }
}
