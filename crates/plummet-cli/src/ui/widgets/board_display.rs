use std::iter;

use plummet_engine::{ActivePiece, Board, Cell};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::CellDisplay;

/// Renders the board grid with the active piece overlaid.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    active_piece: Option<&'a ActivePiece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            active_piece: None,
            block: None,
        }
    }

    pub fn active_piece(self, piece: &'a ActivePiece) -> Self {
        Self {
            active_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let cells = u16::try_from(self.board.width()).unwrap_or(u16::MAX);
        cells.saturating_mul(CellDisplay::width())
            + block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let cells = u16::try_from(self.board.height()).unwrap_or(u16::MAX);
        cells.saturating_mul(CellDisplay::height()) + block_vertical_margin(self.block.as_ref())
    }

    /// The board's cells with the active piece written over them.
    ///
    /// The engine guarantees the piece is collision-free between operations,
    /// so every occupied position lands in bounds.
    fn composed_rows(&self) -> Vec<Vec<Cell>> {
        let mut rows: Vec<Vec<Cell>> = self.board.rows().map(<[Cell]>::to_vec).collect();
        if let Some(piece) = self.active_piece {
            for (x, y) in piece.occupied_positions() {
                if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                    && y < rows.len()
                    && x < rows[y].len()
                {
                    rows[y][x] = Cell::Piece(piece.kind());
                }
            }
        }
        rows
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..self.board.width()).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints =
            (0..self.board.height()).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = vertical.split(area);
        for (grid_row, row) in iter::zip(grid_rows.iter(), self.composed_rows()) {
            let grid_cells = horizontal.split(*grid_row);
            for (grid_cell, cell) in iter::zip(grid_cells.iter(), row) {
                CellDisplay::from_cell(cell, true).render(*grid_cell, buf);
            }
        }
    }
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}
