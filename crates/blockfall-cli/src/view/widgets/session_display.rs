use blockfall_engine::{Session, SessionStatus};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Widget},
};

use crate::view::widgets::{BoardDisplay, StatsDisplay, color, style};

/// The full game view: score panel, board with the falling piece, and the
/// game-over banner once the session has ended.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a Session,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub fn height(&self) -> u16 {
        BoardDisplay::new(self.session.board())
            .block(Block::bordered())
            .height()
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = match self.session.status() {
            SessionStatus::Running => color::WHITE,
            SessionStatus::GameOver => color::RED,
        };

        let game_board = BoardDisplay::new(self.session.board())
            .piece(self.session.piece(), self.session.position())
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let stats = StatsDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("SCORE").centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [stats_column, board_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(game_board.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())])
            .areas::<1>(stats_column);
        let [board_area] = Layout::vertical([Constraint::Length(game_board.height())])
            .areas::<1>(board_column);

        let board_width = game_board.width();
        stats.render(stats_area, buf);
        game_board.render(board_area, buf);

        if self.session.status().is_game_over() {
            let banner_style = style::GAME_OVER;
            let block = Block::new().style(banner_style);
            let text = Text::styled("GAME OVER", banner_style).centered();
            let banner_area =
                board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(banner_area);
            Clear.render(banner_area, buf);
            block.render(banner_area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
