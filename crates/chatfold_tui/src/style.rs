//! Map theme palette colors to ratatui styles.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::Rgb;

#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for panel borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Tool chip body: text on the chip background.
pub fn chip_style(text_rgb: Rgb, chip_rgb: Rgb) -> Style {
    Style::default()
        .fg(rgb_to_color(text_rgb))
        .bg(rgb_to_color(chip_rgb))
}

/// Bold accent, used for key hints such as `[r] Retry`.
pub fn key_hint_style(accent_rgb: Rgb) -> Style {
    Style::default()
        .fg(rgb_to_color(accent_rgb))
        .add_modifier(Modifier::BOLD)
}
