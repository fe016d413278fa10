//! End-of-game summary.

use serde::{Deserialize, Serialize};

use super::events::Standing;
use crate::core::{Phase, PlayerId};
use crate::rules::GameResult;

/// How one phase went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSummary {
    /// Which phase.
    pub phase: Phase,
    /// Rounds played.
    pub rounds_played: u32,
    /// Phase verdict.
    pub result: GameResult,
    /// Phase-scoped totals.
    pub standings: Vec<Standing>,
    /// Rounds without a winner.
    pub ties: u32,
}

/// How the whole game went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Seed the opponents drew from.
    pub seed: u64,
    /// Executed phases, in order.
    pub phases: Vec<PhaseSummary>,
    /// Cumulative totals across executed phases.
    pub standings: Vec<Standing>,
    /// Overall verdict on the cumulative totals.
    pub result: GameResult,
}

impl GameReport {
    /// Whether the bonus phase was played.
    #[must_use]
    pub fn bonus_played(&self) -> bool {
        self.phases.iter().any(|p| p.phase == Phase::Bonus)
    }

    /// Summary of a phase, if it ran.
    #[must_use]
    pub fn phase(&self, phase: Phase) -> Option<&PhaseSummary> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    /// Cumulative points for a seat (0 if absent).
    #[must_use]
    pub fn points(&self, player: PlayerId) -> i64 {
        self.standings
            .iter()
            .find(|s| s.player == player)
            .map_or(0, |s| s.points)
    }

    /// Names of the overall winner(s).
    #[must_use]
    pub fn winner_names(&self) -> Vec<&str> {
        let ids: &[PlayerId] = match &self.result {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(ps) => ps,
        };
        self.standings
            .iter()
            .filter(|s| ids.contains(&s.player))
            .map(|s| s.name.as_str())
            .collect()
    }
}
