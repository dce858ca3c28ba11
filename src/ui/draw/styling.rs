//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::types::ToastKind;
use crate::view::Tone;
use ratatui::style::Color;

/// Get the color for an HTTP method
pub fn get_method_color(method: &str) -> Color {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Color::Green,
        "POST" => Color::Blue,
        "PUT" => Color::Yellow,
        "DELETE" => Color::Red,
        "PATCH" => Color::Cyan,
        _ => Color::White,
    }
}

/// Badge color for a semantic tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Error => Color::Red,
        Tone::Muted => Color::Gray,
    }
}

pub fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Info => Color::Cyan,
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn default_fg() -> Color {
    Color::Gray
}

/// Method column width for consistent formatting
pub const METHOD_COLUMN_WIDTH: usize = 7;

/// Spinner frames, advanced every 100ms while something loads
pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_color_ignores_case() {
        assert_eq!(get_method_color("get"), Color::Green);
        assert_eq!(get_method_color("DELETE"), Color::Red);
        assert_eq!(get_method_color("OPTIONS"), Color::White);
    }
}
