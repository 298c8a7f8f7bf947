//! Session module - manages the complete state of one level
//!
//! This module ties together the core components: grid, connectivity,
//! transforms, shuffle, and the tier classifier. It owns the move and score
//! accounting and the terminal state machine.
//!
//! The caller serializes all mutating calls: one click fully resolves,
//! including any shuffle, before the next is accepted. Once a click passes
//! validation the whole pass runs to completion; there is no cancellation
//! point and no partially applied move.

use log::{debug, error, warn};

use tileblast_core::{classify, connect, shuffle, Grid, SimpleRng};
use tileblast_types::{
    ClickError, ConfigError, GameEvent, LevelConfig, Position, SCORE_PER_TILE,
};

/// Result of one accepted click: the structural events in application
/// order. An inert click (empty cell, singleton group) yields no events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    pub events: Vec<GameEvent>,
}

impl ClickOutcome {
    /// True when the click was legally inert and changed nothing.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Complete state of one level run. Exclusively owns its grid and RNG.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: LevelConfig,
    grid: Grid,
    rng: SimpleRng,
    moves_remaining: u32,
    /// Countdown from `config.target_score`, saturating at zero. Zero means
    /// the target was reached.
    score_remaining: u32,
    /// `Some(is_win)` once terminal; a finished session rejects clicks.
    finished: Option<bool>,
}

impl GameSession {
    /// Validate the configuration and build the opening board.
    ///
    /// Returns the session plus the initial event batch: the full spawn,
    /// the score and move baselines (`is_initial = true`), and a shuffle if
    /// the freshly rolled board happened to start deadlocked.
    pub fn new(config: LevelConfig, seed: u32) -> Result<(Self, Vec<GameEvent>), ConfigError> {
        if let Err(err) = config.validate() {
            error!("level rejected: {err}");
            return Err(err);
        }

        let mut session = Self {
            config,
            grid: Grid::new(config.rows, config.columns),
            rng: SimpleRng::new(seed),
            moves_remaining: config.allowed_moves,
            score_remaining: config.target_score,
            finished: None,
        };

        let spawned = session.grid.refill(&mut session.rng, config.num_colors);
        classify(&mut session.grid, config.thresholds());

        let mut events = vec![
            GameEvent::TilesSpawned { tiles: spawned },
            GameEvent::ScoreChanged {
                delta: config.target_score,
                is_initial: true,
            },
            GameEvent::MovesChanged {
                remaining: config.allowed_moves,
                is_initial: true,
            },
        ];

        if !connect::has_any_move(&session.grid) {
            warn!("opening board is deadlocked, shuffling");
            session.reshuffle(&mut events);
        }

        Ok((session, events))
    }

    /// Apply one click. Runs the full pass atomically: group, clear,
    /// collapse, refill, reclassify, terminal check, deadlock check.
    ///
    /// Rejections (`Err`) never mutate state. An in-bounds click on an
    /// empty cell or a singleton group is not a rejection; it returns an
    /// empty outcome.
    pub fn apply_click(&mut self, row: usize, col: usize) -> Result<ClickOutcome, ClickError> {
        if self.finished.is_some() {
            debug!("click at ({row}, {col}) ignored: game already finished");
            return Err(ClickError::GameFinished);
        }
        if self.moves_remaining == 0 {
            debug!("no more moves left");
            return Err(ClickError::MoveBudgetExhausted);
        }
        if !self.grid.contains(row, col) {
            return Err(ClickError::OutOfBounds { row, col });
        }

        let group = connect::find_group(&self.grid, Position::new(row, col));
        if group.len() < 2 {
            return Ok(ClickOutcome::default());
        }

        let group_size = group.len();
        for &pos in &group {
            self.grid.set(pos.row, pos.col, None);
        }

        self.moves_remaining -= 1;
        let delta = group_size as u32 * SCORE_PER_TILE;
        self.score_remaining = self.score_remaining.saturating_sub(delta);
        debug!(
            "cleared {group_size} tiles, moves left: {}",
            self.moves_remaining
        );

        let moves = self.grid.collapse_columns();
        let spawned = self.grid.refill(&mut self.rng, self.config.num_colors);
        classify(&mut self.grid, self.config.thresholds());

        let mut events = vec![
            GameEvent::TilesCleared {
                positions: group,
                group_size,
            },
            GameEvent::ScoreChanged {
                delta,
                is_initial: false,
            },
            GameEvent::MovesChanged {
                remaining: self.moves_remaining,
                is_initial: false,
            },
            GameEvent::BoardCollapsed { moves },
            GameEvent::TilesSpawned { tiles: spawned },
        ];

        // Reaching the score target wins even on the last move.
        if self.score_remaining == 0 {
            self.finished = Some(true);
        } else if self.moves_remaining == 0 {
            self.finished = Some(false);
        }

        if self.finished.is_none() && !connect::has_any_move(&self.grid) {
            warn!("board deadlocked, shuffling");
            self.reshuffle(&mut events);
        }

        if let Some(is_win) = self.finished {
            debug!("game finished, win: {is_win}");
            events.push(GameEvent::GameFinished { is_win });
        }

        Ok(ClickOutcome { events })
    }

    /// Single shuffle, no retest: the post-shuffle board is reported as-is
    /// and may itself be deadlocked on low-diversity configurations.
    fn reshuffle(&mut self, events: &mut Vec<GameEvent>) {
        shuffle(&mut self.grid, &mut self.rng);
        classify(&mut self.grid, self.config.thresholds());
        events.push(GameEvent::BoardShuffled {
            layout: self.grid.color_layout(),
        });
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    /// Points still needed to reach the target; zero means target reached.
    pub fn score_remaining(&self) -> u32 {
        self.score_remaining
    }

    /// `Some(is_win)` once the session is terminal.
    pub fn finished(&self) -> Option<bool> {
        self.finished
    }

    /// Explicit end-of-session hook. Consumes the session so no further
    /// clicks can arrive after teardown.
    pub fn shutdown(self) {
        debug!(
            "session shut down, moves left: {}, score remaining: {}",
            self.moves_remaining, self.score_remaining
        );
    }
}
