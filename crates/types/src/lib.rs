//! Shared types module - data structures crossing the engine boundary
//!
//! This crate defines the fundamental types used throughout the engine.
//! Everything here is a plain data structure: positions, color keys, level
//! configuration, the events the engine emits, and the typed errors it
//! rejects bad input with. No game logic lives here beyond validation and
//! the threshold-to-tier mapping, which are pure functions of their inputs.
//!
//! # Coordinates
//!
//! The grid is addressed as `(row, column)` with row 0 at the top. Gravity
//! pulls toward larger row indices, so "a tile falls" means its row number
//! increases.
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_PER_TILE` | 100 | Points per tile in a cleared group |
//! | `MAX_COLORS` | 8 | Size of the available color palette |
//!
//! Levels track score as a countdown: the session starts at
//! `LevelConfig::target_score` and subtracts each clear's delta, winning
//! when the remainder reaches zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points awarded per tile in a cleared group (fixed multiplier).
pub const SCORE_PER_TILE: u32 = 100;

/// Number of distinct tile colors available to level configurations.
pub const MAX_COLORS: u8 = 8;

/// A cell address on the grid: `(row, column)`, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Opaque equality key for one of the level's active colors.
///
/// A `ColorId` identifies a color class, not a renderable asset; the
/// presentation layer maps ids to sprites or styles however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorId(pub u8);

/// Cosmetic tile classification derived from connected-group size.
///
/// Tiers are a rendering hint only; they never affect clearing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Default,
    A,
    B,
    C,
}

/// One tile relocation produced by a column collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMove {
    pub from: Position,
    pub to: Position,
}

/// A freshly spawned tile reported by a refill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub position: Position,
    pub color: ColorId,
}

/// Ascending group-size thresholds for tier classification.
///
/// The configuration contract guarantees `a <= b <= c`; comparisons are
/// boundary inclusive (a group of exactly `c` tiles is tier C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl TierThresholds {
    /// Map a connected-group size to its tier.
    pub fn tier_for(&self, group_size: usize) -> Tier {
        if group_size >= self.c {
            Tier::C
        } else if group_size >= self.b {
            Tier::B
        } else if group_size >= self.a {
            Tier::A
        } else {
            Tier::Default
        }
    }
}

/// Immutable per-level configuration, supplied once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub rows: usize,
    pub columns: usize,
    /// Number of active colors K, `1..=MAX_COLORS`.
    pub num_colors: u8,
    pub allowed_moves: u32,
    pub target_score: u32,
    pub threshold_a: usize,
    pub threshold_b: usize,
    pub threshold_c: usize,
}

impl LevelConfig {
    /// Check the invariants a session refuses to start without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::NonPositiveDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.num_colors == 0 || self.num_colors > MAX_COLORS {
            return Err(ConfigError::InvalidColorCount {
                got: self.num_colors,
                max: MAX_COLORS,
            });
        }
        if self.threshold_a > self.threshold_b || self.threshold_b > self.threshold_c {
            return Err(ConfigError::ThresholdsNotAscending {
                a: self.threshold_a,
                b: self.threshold_b,
                c: self.threshold_c,
            });
        }
        Ok(())
    }

    pub fn thresholds(&self) -> TierThresholds {
        TierThresholds {
            a: self.threshold_a,
            b: self.threshold_b,
            c: self.threshold_c,
        }
    }
}

/// Fatal configuration failures, reported at session construction.
///
/// A misconfigured level is never tolerated mid-game; every variant here
/// means the session refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    NonPositiveDimensions { rows: usize, columns: usize },
    #[error("color count must be between 1 and {max}, got {got}")]
    InvalidColorCount { got: u8, max: u8 },
    #[error("tier thresholds must be ascending, got a={a} b={b} c={c}")]
    ThresholdsNotAscending { a: usize, b: usize, c: usize },
}

/// Rejected clicks. Rejection never mutates session state.
///
/// Clicking an empty cell or a group of size 1 is NOT an error; those
/// clicks are legally inert and produce an empty outcome instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickError {
    #[error("click at ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("no moves remaining")]
    MoveBudgetExhausted,
    #[error("the game is already finished")]
    GameFinished,
}

/// Structural mutation events emitted by the engine, in application order.
///
/// The engine returns these as plain values; an external dispatcher relays
/// them to presentation subsystems. The engine itself never holds observer
/// registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A connected group was removed from the board.
    TilesCleared {
        positions: Vec<Position>,
        group_size: usize,
    },
    /// Tiles fell to fill column gaps, in `(from, to)` pairs.
    BoardCollapsed { moves: Vec<TileMove> },
    /// New tiles entered the board after a collapse (or at level start).
    TilesSpawned { tiles: Vec<SpawnedTile> },
    /// The board was rearranged after a deadlock; `layout` is the full
    /// row-major color snapshot after the shuffle.
    BoardShuffled { layout: Vec<Option<ColorId>> },
    /// Score delta for this step. `is_initial` marks the level-start
    /// baseline (the full target), not a clear.
    ScoreChanged { delta: u32, is_initial: bool },
    /// Remaining move budget after this step.
    MovesChanged { remaining: u32, is_initial: bool },
    /// Terminal result; after this the session rejects all clicks.
    GameFinished { is_win: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> LevelConfig {
        LevelConfig {
            rows: 5,
            columns: 6,
            num_colors: 4,
            allowed_moves: 20,
            target_score: 1500,
            threshold_a: 4,
            threshold_b: 7,
            threshold_c: 10,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(base_config().validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = base_config();
        config.rows = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDimensions { rows: 0, columns: 6 })
        );

        let mut config = base_config();
        config.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_count_bounds() {
        let mut config = base_config();
        config.num_colors = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidColorCount { got: 0, .. })
        ));

        config.num_colors = MAX_COLORS;
        assert_eq!(config.validate(), Ok(()));

        config.num_colors = MAX_COLORS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_thresholds_must_ascend() {
        let mut config = base_config();
        config.threshold_a = 8;
        config.threshold_b = 7;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdsNotAscending { .. })
        ));

        // Equal thresholds are allowed.
        let mut config = base_config();
        config.threshold_a = 7;
        config.threshold_b = 7;
        config.threshold_c = 7;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_tier_for_boundaries() {
        let thresholds = TierThresholds { a: 4, b: 7, c: 10 };

        assert_eq!(thresholds.tier_for(1), Tier::Default);
        assert_eq!(thresholds.tier_for(3), Tier::Default);
        assert_eq!(thresholds.tier_for(4), Tier::A);
        assert_eq!(thresholds.tier_for(6), Tier::A);
        assert_eq!(thresholds.tier_for(7), Tier::B);
        assert_eq!(thresholds.tier_for(9), Tier::B);
        assert_eq!(thresholds.tier_for(10), Tier::C);
        assert_eq!(thresholds.tier_for(50), Tier::C);
    }

    #[test]
    fn test_tier_monotonic_in_group_size() {
        let thresholds = TierThresholds { a: 2, b: 5, c: 9 };
        let rank = |tier: Tier| match tier {
            Tier::Default => 0,
            Tier::A => 1,
            Tier::B => 2,
            Tier::C => 3,
        };

        let mut previous = 0;
        for size in 0..20 {
            let current = rank(thresholds.tier_for(size));
            assert!(current >= previous, "tier rank dropped at size {}", size);
            previous = current;
        }
    }

    #[test]
    fn test_click_error_messages() {
        let err = ClickError::OutOfBounds { row: 9, col: 2 };
        assert_eq!(err.to_string(), "click at (9, 2) is outside the grid");
        assert_eq!(
            ClickError::MoveBudgetExhausted.to_string(),
            "no moves remaining"
        );
    }
}
