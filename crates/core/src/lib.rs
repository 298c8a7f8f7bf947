//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid store and every board algorithm: connectivity
//! search, gravity collapse, refill, shuffle, and tier classification. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards (for replay and tests)
//! - **Testable**: Every rule is a pure function of grid state
//! - **Portable**: Can run in any environment (GUI, headless, server-side)
//!
//! # Module Structure
//!
//! - [`grid`]: the `rows x columns` tile store with the collapse and refill transforms
//! - [`connect`]: same-color flood fill and the deadlock predicate
//! - [`classify`]: group-size tier tagging over the whole board
//! - [`shuffle`]: Fisher-Yates rearrangement of a deadlocked board
//! - [`rng`]: seeded LCG random source for spawns and shuffles
//!
//! # Example
//!
//! ```
//! use tileblast_core::{connect, Grid, SimpleRng};
//! use tileblast_types::Position;
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut grid = Grid::new(6, 6);
//! grid.refill(&mut rng, 3);
//!
//! let group = connect::find_group(&grid, Position::new(0, 0));
//! assert!(!group.is_empty());
//! ```

pub mod classify;
pub mod connect;
pub mod grid;
pub mod rng;
pub mod shuffle;

pub use tileblast_types as types;

// Re-export commonly used types for convenience
pub use classify::classify;
pub use connect::{find_group, has_any_move};
pub use grid::{Grid, Tile};
pub use rng::SimpleRng;
pub use shuffle::shuffle;
