use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    ConfigError,
    core::{ActivePiece, Board, Rotation},
};

use super::{
    piece_source::PieceSource,
    playfield::{Direction, Playfield, StepOutcome},
};

/// Parameters of a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board columns.
    pub width: usize,
    /// Board rows.
    pub height: usize,
    /// Accumulated time after which gravity drops the piece one row.
    pub drop_interval: Duration,
    /// Seed for the piece sequence; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    /// The classic 12×20 arena with a one-second gravity interval.
    fn default() -> Self {
        Self {
            width: 12,
            height: 20,
            drop_interval: Duration::from_millis(1000),
            seed: None,
        }
    }
}

impl GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroBoardDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.drop_interval.is_zero() {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }
}

/// A complete game instance: playfield plus gravity timing.
///
/// The game owns all mutable state, so independent instances coexist and
/// tests run in isolation. All operations are synchronous and run to
/// completion; the host serializes input commands with the per-frame
/// [`tick`](Self::tick) by construction (there is one logical thread).
#[derive(Debug, Clone)]
pub struct Game {
    playfield: Playfield,
    drop_interval: Duration,
    accumulator: Duration,
}

impl Game {
    /// Builds a game from `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => PieceSource::from_seed(seed),
            None => PieceSource::from_os_rng(),
        };
        Ok(Self {
            playfield: Playfield::new(config.width, config.height, source),
            drop_interval: config.drop_interval,
            accumulator: Duration::ZERO,
        })
    }

    /// Read-only view of the locked grid, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.playfield.board()
    }

    /// Read-only view of the falling piece, for rendering.
    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        self.playfield.active_piece()
    }

    /// Configured gravity interval.
    #[must_use]
    pub fn drop_interval(&self) -> Duration {
        self.drop_interval
    }

    /// Advances game time by `elapsed`.
    ///
    /// Accumulates elapsed time; once the accumulator exceeds the drop
    /// interval a gravity drop runs (at most one per call) and the
    /// accumulator restarts from zero. Nothing else resets the accumulator
    /// besides an executed drop.
    pub fn tick(&mut self, elapsed: Duration) -> Option<StepOutcome> {
        self.accumulator = self.accumulator.saturating_add(elapsed);
        (self.accumulator > self.drop_interval).then(|| self.soft_drop())
    }

    /// Moves the piece one column left; no-op against obstruction.
    pub fn move_left(&mut self) -> bool {
        self.playfield.shift(Direction::Left)
    }

    /// Moves the piece one column right; no-op against obstruction.
    pub fn move_right(&mut self) -> bool {
        self.playfield.shift(Direction::Right)
    }

    /// Drops the piece one row, locking on contact.
    ///
    /// Whether or not a lock occurred, the gravity accumulator restarts from
    /// zero, so a manual drop postpones the next gravity drop by a full
    /// interval.
    pub fn soft_drop(&mut self) -> StepOutcome {
        let outcome = self.playfield.step_down();
        self.accumulator = Duration::ZERO;
        outcome
    }

    /// Rotates the piece clockwise; aborted rotations leave it untouched.
    pub fn rotate_cw(&mut self) -> bool {
        self.playfield.rotate(Rotation::Clockwise)
    }

    /// Rotates the piece counter-clockwise; aborted rotations leave it
    /// untouched.
    pub fn rotate_ccw(&mut self) -> bool {
        self.playfield.rotate(Rotation::CounterClockwise)
    }
}
