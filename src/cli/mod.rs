//! Interactive console front-end.
//!
//! Thin I/O wrappers around the engine: `ConsoleInput` parses what the
//! player types, `ConsoleObserver` narrates the events.

pub mod console;

pub use console::{parse_move, ConsoleInput, ConsoleObserver, RULES};
