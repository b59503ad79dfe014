use std::iter;

use blockfall_engine::{Board, Piece, Position};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::CellDisplay;

/// Renders the settled board with the falling piece overlaid.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    piece: Option<(&'a Piece, Position)>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: &'a Piece, position: Position) -> Self {
        Self {
            piece: Some((piece, position)),
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
        u16::try_from(Board::WIDTH).unwrap() * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(Board::HEIGHT).unwrap() * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
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

        let mut board = self.board.clone();
        if let Some((piece, position)) = self.piece {
            // Piece cells hanging above the top edge have no grid cell to
            // land in and are simply not drawn.
            for (dx, dy) in piece.shape().occupied_cells() {
                let (x, y) = position.cell(dx, dy);
                if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                    && x < Board::WIDTH
                    && y < Board::HEIGHT
                {
                    board.set_cell(x, y, piece.kind());
                }
            }
        }

        let col_constraints = (0..Board::WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..Board::HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, board.rows()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                let cell_display = CellDisplay::from_cell(*cell, true);
                cell_display.render(grid_cell, buf);
            }
        }
    }
}
