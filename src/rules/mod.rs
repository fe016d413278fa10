//! Move rules.
//!
//! - `moves`: the pieces (Dragon, Wizard, Knight, Druid)
//! - `ruleset`: the beats-relation per phase
//! - `verdict`: phase and game winners
//!
//! The tables here are fixed. Nothing mutates them at runtime.

pub mod moves;
pub mod ruleset;
pub mod verdict;

pub use moves::Move;
pub use ruleset::RuleSet;
pub use verdict::GameResult;
