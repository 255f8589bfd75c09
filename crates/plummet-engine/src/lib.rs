pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a [`GameConfig`] cannot describe a playable game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// Board width or height is zero.
    #[display("board dimensions must be nonzero, got {width}x{height}")]
    ZeroBoardDimension {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },
    /// Gravity drop interval is zero.
    #[display("drop interval must be nonzero")]
    ZeroDropInterval,
}
