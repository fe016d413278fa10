//! Participant identification and per-participant data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The human always sits at `PlayerId::HUMAN`;
//! opponents take the following seats in the order they join.
//!
//! ## PlayerMap
//!
//! Per-participant storage backed by `Vec` for O(1) access. Unlike a fixed
//! table it can grow, since the bonus phase seats an extra opponent.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Seat of the human (primary) participant.
    pub const HUMAN: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-participant data with O(1) access.
///
/// ```
/// use dragon_wizard_knight::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<i64> = PlayerMap::with_value(2, 0);
/// points[PlayerId::new(1)] += 1;
/// let bob = points.push(0);
///
/// assert_eq!(bob, PlayerId::new(2));
/// assert_eq!(points[PlayerId::new(1)], 1);
/// assert_eq!(points.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

// No `T: Default` bound: seats are pushed one at a time.
impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= u8::MAX as usize, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Seat a new participant and return their ID.
    pub fn push(&mut self, value: T) -> PlayerId {
        assert!(self.data.len() < u8::MAX as usize, "At most 255 players supported");
        self.data.push(value);
        PlayerId((self.data.len() - 1) as u8)
    }

    /// Number of seated participants.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a participant's data, if seated.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a participant's data, if seated.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
