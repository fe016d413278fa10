//! Round resolution: submissions in, outcome out.

pub mod outcome;
pub mod resolver;

pub use outcome::{RoundOutcome, SeatVec, Submission, Validation};
pub use resolver::RoundResolver;
