use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(16, 20, 16);
pub const SURFACE: Color = Color::Rgb(24, 30, 24);
pub const BORDER: Color = Color::Rgb(50, 64, 48);
pub const TEXT: Color = Color::Rgb(222, 230, 214);
pub const TEXT_DIM: Color = Color::Rgb(120, 136, 116);
pub const LEAF: Color = Color::Rgb(120, 176, 96);
pub const GREEN: Color = Color::Rgb(92, 160, 100);
pub const AMBER: Color = Color::Rgb(214, 160, 64);
pub const RED: Color = Color::Rgb(196, 88, 72);
pub const FLAME: Color = Color::Rgb(236, 120, 48);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn leaf() -> Style {
    Style::default().fg(LEAF)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn flame() -> Style {
    Style::default().fg(FLAME).add_modifier(Modifier::BOLD)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}
