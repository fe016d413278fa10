//! Phase and game verdicts.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed phase or game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single participant holds the strictly highest score.
    Winner(PlayerId),
    /// Several participants share the highest score.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Decide a verdict from (participant, points) pairs.
    ///
    /// Returns `None` when nobody is scored.
    ///
    /// ```
    /// use dragon_wizard_knight::core::PlayerId;
    /// use dragon_wizard_knight::rules::GameResult;
    ///
    /// let (you, sally, bob) = (PlayerId::new(0), PlayerId::new(1), PlayerId::new(2));
    ///
    /// let result = GameResult::from_points([(you, 3), (sally, 1)]);
    /// assert_eq!(result, Some(GameResult::Winner(you)));
    ///
    /// let result = GameResult::from_points([(you, 0), (sally, 2), (bob, 2)]);
    /// assert_eq!(result, Some(GameResult::Tie(vec![sally, bob])));
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = (PlayerId, i64)>) -> Option<Self> {
        let points: Vec<_> = points.into_iter().collect();
        let best = points.iter().map(|&(_, p)| p).max()?;
        let mut leaders: Vec<PlayerId> = points
            .iter()
            .filter(|&&(_, p)| p == best)
            .map(|&(id, _)| id)
            .collect();

        if leaders.len() == 1 {
            Some(GameResult::Winner(leaders[0]))
        } else {
            leaders.sort();
            Some(GameResult::Tie(leaders))
        }
    }

    /// The sole winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie(_) => None,
        }
    }

    /// Check if a participant won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}
