use crate::core::{
    ActivePiece, Board, Rotation,
    shape::kick_offsets,
};

use super::piece_source::PieceSource;

/// Horizontal unit step of a move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One column to the left.
    Left,
    /// One column to the right.
    Right,
}

impl Direction {
    /// Signed column delta of the step.
    #[must_use]
    pub const fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Result of a single downward step of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece could not move down and was locked into the board.
    Locked(LockOutcome),
}

/// What happened when the active piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Full rows swept away after the merge.
    pub cleared_rows: usize,
    /// The replacement piece collided at spawn: the board was wiped (the
    /// implicit game-over restart) before installing that piece.
    pub board_reset: bool,
}

/// The board together with the single active piece and its lifecycle.
///
/// Every operation is an expected branch: an illegal move or rotation is
/// resolved by reverting the tentative state, never reported as an error.
/// The playfield is the only component that mutates the board (via merge and
/// sweep) or the active piece.
#[derive(Debug, Clone)]
pub struct Playfield {
    board: Board,
    active: ActivePiece,
    source: PieceSource,
}

impl Playfield {
    /// Creates a playfield with an empty board and a freshly spawned piece.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero (see [`Board::new`]).
    #[must_use]
    pub fn new(width: usize, height: usize, mut source: PieceSource) -> Self {
        let board = Board::new(width, height);
        let active = ActivePiece::spawn(source.next_kind(), width);
        Self {
            board,
            active,
            source,
        }
    }

    /// Read-only view of the locked grid, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of the falling piece, for rendering.
    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        &self.active
    }

    /// Shifts the active piece one column; reverts on collision.
    ///
    /// Returns whether the shift stuck.
    pub fn shift(&mut self, direction: Direction) -> bool {
        self.active.x += direction.dx();
        if self.board.collides(&self.active) {
            self.active.x -= direction.dx();
            return false;
        }
        true
    }

    /// Moves the active piece down one row, locking it if it cannot fall.
    ///
    /// On lock the piece is merged into the board, full rows are swept, and a
    /// replacement spawns. A replacement that collides immediately is the
    /// game-over condition: the board is wiped and the piece installed
    /// anyway (spawn is not retried), reported via
    /// [`LockOutcome::board_reset`].
    pub fn step_down(&mut self) -> StepOutcome {
        self.active.y += 1;
        if !self.board.collides(&self.active) {
            return StepOutcome::Fell;
        }
        self.active.y -= 1;

        self.board.merge(&self.active);
        let cleared_rows = self.board.sweep();
        let board_reset = self.spawn_next();
        StepOutcome::Locked(LockOutcome {
            cleared_rows,
            board_reset,
        })
    }

    /// Rotates the active piece, kicking off walls if needed.
    ///
    /// The rotated shape is tried in place first, then at each cumulative
    /// kick offset (`+1, -2, +3, …`, net `+1, -1, +2, …`). The first
    /// non-colliding position commits. If the bounded search exhausts, the
    /// rotation aborts: shape and position are restored exactly and `false`
    /// is returned.
    pub fn rotate(&mut self, rotation: Rotation) -> bool {
        let prior_x = self.active.x;
        let rotated = self.active.shape.rotated(rotation);
        let prior_shape = std::mem::replace(&mut self.active.shape, rotated);

        if !self.board.collides(&self.active) {
            return true;
        }
        for offset in kick_offsets(self.active.shape.side()) {
            self.active.x += offset;
            if !self.board.collides(&self.active) {
                return true;
            }
        }

        self.active.shape = prior_shape;
        self.active.x = prior_x;
        false
    }

    /// Spawns the next random piece; returns whether the board was reset.
    fn spawn_next(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.source.next_kind(), self.board.width());
        let reset = self.board.collides(&piece);
        if reset {
            self.board.clear();
        }
        self.active = piece;
        reset
    }
}
