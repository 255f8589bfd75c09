use serde::{Deserialize, Serialize};

use super::piece::{ActivePiece, PieceKind};

/// A single cell in the board grid.
///
/// Semantically this is the small integer of the classic matrix encoding:
/// `0` for empty, the piece kind's id (`1..=7`) for a locked cell. No other
/// values ever appear on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell (no piece).
    #[default]
    Empty,
    /// Cell locked by a piece of a specific type.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Numeric encoding of this cell (`0` for empty, the kind id otherwise).
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(kind) => kind.id(),
        }
    }

    /// Inverse of [`id`](Self::id).
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if id == 0 {
            Some(Cell::Empty)
        } else {
            match PieceKind::from_id(id) {
                Some(kind) => Some(Cell::Piece(kind)),
                None => None,
            }
        }
    }
}

/// The persistent grid of locked cells (the arena).
///
/// Row-major with row 0 at the top. Dimensions are fixed at construction;
/// only cell values mutate afterwards. The board never inspects the active
/// piece except through the pure [`collides`](Self::collides) test and the
/// caller-gated [`merge`](Self::merge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an all-empty board of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Callers constructing boards from
    /// external configuration validate through
    /// [`GameConfig`](crate::engine::GameConfig) first.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be nonzero");
        Self {
            width,
            height,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Iterates over rows from top to bottom, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Tests whether the piece overlaps the board's content or bounds.
    ///
    /// True iff some occupied sub-cell maps outside the grid or onto a
    /// nonzero cell. Pure: reads both, mutates neither. Every gating decision
    /// in the engine (move, drop, rotate, spawn) goes through this test.
    #[must_use]
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        piece.occupied_positions().any(|(x, y)| {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                return true;
            };
            x >= self.width || y >= self.height || !self.rows[y][x].is_empty()
        })
    }

    /// Writes the piece's occupied cells into the grid.
    ///
    /// The caller guarantees the piece is collision-free beforehand; an
    /// out-of-bounds merge is a programming error, not a runtime condition.
    pub fn merge(&mut self, piece: &ActivePiece) {
        debug_assert!(!self.collides(piece));
        for (x, y) in piece.occupied_positions() {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            self.rows[y][x] = Cell::Piece(piece.kind());
        }
    }

    /// Removes every full row, inserting an empty row at the top for each.
    ///
    /// Scans bottom-to-top. Removing a row shifts everything above it down
    /// one position, so the same index is re-examined before the scan
    /// advances; skipping it would miss stacked full rows. Total row count is
    /// preserved, and a fully-filled board sweeps to all-empty.
    ///
    /// Returns the number of rows cleared.
    pub fn sweep(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            y -= 1;
            if self.rows[y].iter().any(|cell| cell.is_empty()) {
                continue;
            }
            let mut row = self.rows.remove(y);
            row.fill(Cell::Empty);
            self.rows.insert(0, row);
            cleared += 1;
            // Re-test the same index: the row above just moved into it.
            y += 1;
        }
        cleared
    }

    /// Directly sets a cell, for building test scenarios.
    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Resets every cell to empty. Dimensions are unchanged.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::Empty);
        }
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: one digit per cell, rows comma-separated ("0000,0130,...")
        let mut s = String::with_capacity(self.height * (self.width + 1));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                s.push(',');
            }
            for cell in row {
                s.push(char::from(b'0' + cell.id()));
            }
        }
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let mut rows = Vec::new();
        let mut width = None;
        for (i, row_str) in s.split(',').enumerate() {
            let row = row_str
                .chars()
                .map(|c| {
                    let id = c
                        .to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .ok_or_else(|| {
                            serde::de::Error::custom(format!("invalid cell at row {i}: {c:?}"))
                        })?;
                    Cell::from_id(id).ok_or_else(|| {
                        serde::de::Error::custom(format!("invalid cell id at row {i}: {id}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if row.is_empty() {
                return Err(serde::de::Error::custom(format!("empty row {i}")));
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(serde::de::Error::custom(format!(
                        "row {i} has {} cells, expected {w}",
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        let Some(width) = width else {
            return Err(serde::de::Error::custom("empty board"));
        };
        Ok(Board {
            width,
            height: rows.len(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: usize, kind: PieceKind) {
        for x in 0..board.width() {
            board.rows[y][x] = Cell::Piece(kind);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(12, 20);
        assert_eq!(board.width(), 12);
        assert_eq!(board.height(), 20);
        for row in board.rows() {
            assert!(row.iter().all(|cell| cell.is_empty()));
        }
    }

    #[test]
    #[should_panic(expected = "board dimensions must be nonzero")]
    fn test_zero_dimension_panics() {
        let _ = Board::new(0, 20);
    }

    #[test]
    fn test_collides_empty_board_in_bounds() {
        let board = Board::new(12, 20);
        let piece = ActivePiece::spawn(PieceKind::O, board.width());
        assert!(!board.collides(&piece));
    }

    #[test]
    fn test_collides_left_right_bottom_bounds() {
        let board = Board::new(12, 20);
        let mut piece = ActivePiece::spawn(PieceKind::O, board.width());

        piece.x = -1;
        assert!(board.collides(&piece));
        piece.x = 11; // right column of the 2x2 footprint lands at x=12
        assert!(board.collides(&piece));
        piece.x = 10;
        assert!(!board.collides(&piece));

        piece.y = 19; // bottom row of the footprint lands at y=20
        assert!(board.collides(&piece));
        piece.y = 18;
        assert!(!board.collides(&piece));
    }

    #[test]
    fn test_collides_ignores_empty_sub_cells() {
        // The T spawn shape has an empty top-left corner; a locked cell
        // under that corner must not register as a collision.
        let mut board = Board::new(12, 20);
        let piece = ActivePiece::spawn(PieceKind::T, board.width());
        board.rows[0][usize::try_from(piece.x()).unwrap()] = Cell::Piece(PieceKind::I);
        assert!(!board.collides(&piece));
    }

    #[test]
    fn test_collides_on_occupied_cell() {
        let mut board = Board::new(12, 20);
        let piece = ActivePiece::spawn(PieceKind::O, board.width());
        board.rows[1][6] = Cell::Piece(PieceKind::Z);
        assert!(board.collides(&piece));
    }

    #[test]
    fn test_merge_writes_exact_footprint() {
        let mut board = Board::new(12, 20);
        let before = board.clone();
        let piece = ActivePiece::spawn(PieceKind::T, board.width());
        board.merge(&piece);

        let footprint: Vec<_> = piece.occupied_positions().collect();
        for y in 0..board.height() {
            for x in 0..board.width() {
                #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
                let pos = (x as i32, y as i32);
                if footprint.contains(&pos) {
                    assert_eq!(board.cell(x, y), Cell::Piece(PieceKind::T));
                } else {
                    assert_eq!(board.cell(x, y), before.cell(x, y));
                }
            }
        }
    }

    #[test]
    fn test_sweep_without_full_rows_is_noop() {
        let mut board = Board::new(12, 20);
        board.rows[19][0] = Cell::Piece(PieceKind::L);
        board.rows[10][5] = Cell::Piece(PieceKind::J);
        let before = board.clone();
        assert_eq!(board.sweep(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_sweep_full_board_leaves_all_empty() {
        let mut board = Board::new(12, 20);
        for y in 0..20 {
            fill_row(&mut board, y, PieceKind::I);
        }
        assert_eq!(board.sweep(), 20);
        assert_eq!(board, Board::new(12, 20));
    }

    #[test]
    fn test_sweep_shifts_rows_above_down() {
        let mut board = Board::new(12, 20);
        fill_row(&mut board, 19, PieceKind::I);
        board.rows[18][3] = Cell::Piece(PieceKind::T);

        assert_eq!(board.sweep(), 1);
        // The partial row moved from 18 to 19; a fresh empty row sits on top.
        assert_eq!(board.cell(3, 19), Cell::Piece(PieceKind::T));
        assert!(board.rows[18].iter().all(|cell| cell.is_empty()));
        assert!(board.rows[0].iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_sweep_retests_shifted_index() {
        // Two stacked full rows: after removing row 19 the old row 18
        // occupies index 19 and must be caught by the re-test, not skipped.
        let mut board = Board::new(12, 20);
        fill_row(&mut board, 18, PieceKind::S);
        fill_row(&mut board, 19, PieceKind::Z);
        board.rows[17][0] = Cell::Piece(PieceKind::O);

        assert_eq!(board.sweep(), 2);
        assert_eq!(board.cell(0, 19), Cell::Piece(PieceKind::O));
        for y in 0..19 {
            assert!(board.rows[y].iter().all(|cell| cell.is_empty()), "row {y}");
        }
    }

    #[test]
    fn test_completing_a_row_sweeps_it() {
        // Bottom row full except one cell; a piece filling that cell
        // completes the row, and sweeping removes it.
        let mut board = Board::new(12, 20);
        fill_row(&mut board, 19, PieceKind::I);
        board.rows[19][0] = Cell::Empty;
        board.rows[19][1] = Cell::Empty;
        // Row 18 left-edge marker to observe the downward shift.
        board.rows[18][11] = Cell::Piece(PieceKind::J);

        let mut piece = ActivePiece::spawn(PieceKind::O, board.width());
        piece.x = 0;
        piece.y = 18;
        assert!(!board.collides(&piece));
        board.merge(&piece);
        assert_eq!(board.sweep(), 1);

        // Old row 18 is now row 19: the J marker and the O's top half.
        assert_eq!(board.cell(11, 19), Cell::Piece(PieceKind::J));
        assert_eq!(board.cell(0, 19), Cell::Piece(PieceKind::O));
        assert_eq!(board.cell(1, 19), Cell::Piece(PieceKind::O));
        assert!(board.rows[0].iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_clear_empties_every_cell() {
        let mut board = Board::new(12, 20);
        fill_row(&mut board, 19, PieceKind::T);
        board.clear();
        assert_eq!(board, Board::new(12, 20));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = Board::new(4, 3);
        board.rows[2] = vec![
            Cell::Piece(PieceKind::I),
            Cell::Empty,
            Cell::Piece(PieceKind::Z),
            Cell::Piece(PieceKind::T),
        ];

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"0000,0000,1074\"");

        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_serde_rejects_malformed_boards() {
        // Non-digit cell
        assert!(serde_json::from_str::<Board>("\"00x0\"").is_err());
        // Cell id out of range
        assert!(serde_json::from_str::<Board>("\"0080\"").is_err());
        // Ragged rows
        assert!(serde_json::from_str::<Board>("\"0000,000\"").is_err());
        // Empty input
        assert!(serde_json::from_str::<Board>("\"\"").is_err());
    }
}
