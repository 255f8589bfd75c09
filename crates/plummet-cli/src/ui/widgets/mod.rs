pub use self::{board_display::*, cell_display::*};

mod board_display;
mod cell_display;

mod color {
    use ratatui::style::Color;

    // The classic engine's palette, one entry per piece id.
    pub const PINK: Color = Color::Rgb(0xff, 0x0d, 0x72);
    pub const SKY: Color = Color::Rgb(0x0d, 0xc2, 0xff);
    pub const GREEN: Color = Color::Rgb(0x0d, 0xff, 0x72);
    pub const MAGENTA: Color = Color::Rgb(0xf5, 0x38, 0xff);
    pub const ORANGE: Color = Color::Rgb(0xff, 0x8e, 0x0d);
    pub const YELLOW: Color = Color::Rgb(0xff, 0xe1, 0x38);
    pub const BLUE: Color = Color::Rgb(0x38, 0x77, 0xff);
    pub const GRAY: Color = Color::Rgb(0x7f, 0x7f, 0x7f);
    pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);

    pub const I_CELL: Style = bg_only(color::PINK);
    pub const J_CELL: Style = bg_only(color::SKY);
    pub const O_CELL: Style = bg_only(color::GREEN);
    pub const T_CELL: Style = bg_only(color::MAGENTA);
    pub const L_CELL: Style = bg_only(color::ORANGE);
    pub const S_CELL: Style = bg_only(color::YELLOW);
    pub const Z_CELL: Style = bg_only(color::BLUE);
}
