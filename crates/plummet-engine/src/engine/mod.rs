//! Game logic orchestrating the core data structures.
//!
//! - [`Playfield`] - board plus the single active piece and its lifecycle
//!   (spawn, move, rotate, drop, lock)
//! - [`Game`] - an explicit engine object owning a [`Playfield`] and the
//!   gravity drop-time accumulator; independent instances compose
//! - [`PieceSource`] - seedable randomness for piece selection
//!
//! # Game flow
//!
//! 1. Build a [`Game`] from a [`GameConfig`]
//! 2. The host calls [`Game::tick`] once per frame with the elapsed time;
//!    when the accumulated time exceeds the drop interval a gravity drop runs
//! 3. Input commands ([`Game::move_left`], [`Game::rotate_cw`], …) apply
//!    synchronously between ticks
//! 4. A drop that cannot fall locks the piece, sweeps full rows, and spawns
//!    a replacement; a spawn that immediately collides resets the board and
//!    is reported through [`LockOutcome::board_reset`]
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use plummet_engine::{Game, GameConfig, StepOutcome};
//!
//! let config = GameConfig {
//!     seed: Some(42),
//!     ..GameConfig::default()
//! };
//! let mut game = Game::new(config).unwrap();
//!
//! game.move_left();
//! game.rotate_cw();
//!
//! if let Some(StepOutcome::Locked(lock)) = game.tick(Duration::from_secs(1)) {
//!     println!("cleared {} rows", lock.cleared_rows);
//! }
//! ```

pub use self::{game::*, piece_source::*, playfield::*};

mod game;
mod piece_source;
mod playfield;
