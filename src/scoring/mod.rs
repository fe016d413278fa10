//! Scoring policy and per-phase score keeping.

pub mod keeper;
pub mod policy;

pub use keeper::ScoreKeeper;
pub use policy::{ScoringPolicy, DRUID_LOSS, DRUID_WIN, STANDARD_WIN};
