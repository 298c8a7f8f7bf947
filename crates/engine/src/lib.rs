//! Engine module - the session layer over the core board algorithms
//!
//! A [`GameSession`](session::GameSession) owns one grid for one level: it
//! validates the configuration, runs the full click pass (group, clear,
//! collapse, refill, reclassify, terminal and deadlock checks), and returns
//! the structural events a presentation layer replays. The engine holds no
//! observer registrations and performs no I/O beyond `log` diagnostics.

pub mod progress;
pub mod session;

pub use progress::LevelProgress;
pub use session::{ClickOutcome, GameSession};
