use ratatui::style::{Color, Modifier, Style};

use crate::models::Status;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const HEADER_FG: Color = Color::Rgb(205, 214, 244);
pub(crate) const ACCENT: Color = Color::Rgb(236, 72, 153);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

// Chart series
pub(crate) const RKA_BAR: Color = Color::Rgb(236, 72, 153);
pub(crate) const RPD_BAR: Color = Color::Rgb(249, 168, 212);
pub(crate) const SPJ_BAR: Color = Color::Rgb(209, 213, 219);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

/// Badge color for a status cell. Labels that are not a known status
/// (e.g. free text from an imported sheet) get no badge.
pub(crate) fn status_badge_style(label: &str) -> Style {
    let bg = match Status::from_label(label) {
        Some(Status::Safe) => GREEN,
        Some(Status::Short) => YELLOW,
        Some(Status::Overrun) => RED,
        None => return normal_style(),
    };
    Style::default()
        .fg(HEADER_BG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}
