use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Semantic tone of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
    Dim,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => theme::colors::SUCCESS,
            Tone::Error => theme::colors::ERROR,
            Tone::Info => theme::colors::INFO,
            Tone::Dim => theme::colors::DIM,
        }
    }
}

/// Color `text` when the terminal allows it
pub fn paint(text: &str, tone: Tone, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.with(tone.color()))
}

/// Bold variant of [`paint`], used for titles
pub fn strong(text: &str, tone: Tone, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.with(tone.color()).bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_color_returns_plain_text() {
        assert_eq!(paint("ok", Tone::Success, false), "ok");
        assert_eq!(strong("title", Tone::Info, false), "title");
    }

    #[test]
    fn paint_with_color_includes_ansi_escape() {
        assert!(paint("no", Tone::Error, true).contains("\u{1b}["));
    }
}
