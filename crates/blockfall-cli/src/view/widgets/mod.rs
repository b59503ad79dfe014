use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, key_binding_display::*, session_display::*,
    stats_display::*,
};

mod board_display;
mod cell_display;
mod key_binding_display;
mod session_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    // Piece colors match the classic palette (#00f0f0 etc.).
    pub const CYAN: Color = Color::Rgb(0, 240, 240);
    pub const YELLOW: Color = Color::Rgb(240, 240, 0);
    pub const PURPLE: Color = Color::Rgb(160, 0, 240);
    pub const GREEN: Color = Color::Rgb(0, 240, 0);
    pub const RED: Color = Color::Rgb(240, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 240);
    pub const ORANGE: Color = Color::Rgb(240, 160, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use blockfall_engine::PieceKind;
    use ratatui::style::{Color, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);

    pub const I_BLOCK: Style = bg_only(color::CYAN);
    pub const O_BLOCK: Style = bg_only(color::YELLOW);
    pub const T_BLOCK: Style = bg_only(color::PURPLE);
    pub const S_BLOCK: Style = bg_only(color::GREEN);
    pub const Z_BLOCK: Style = bg_only(color::RED);
    pub const J_BLOCK: Style = bg_only(color::BLUE);
    pub const L_BLOCK: Style = bg_only(color::ORANGE);

    #[must_use]
    pub const fn for_kind(kind: PieceKind) -> Style {
        match kind {
            PieceKind::I => I_BLOCK,
            PieceKind::O => O_BLOCK,
            PieceKind::T => T_BLOCK,
            PieceKind::S => S_BLOCK,
            PieceKind::Z => Z_BLOCK,
            PieceKind::J => J_BLOCK,
            PieceKind::L => L_BLOCK,
        }
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
