// Theme system for the TUI
//
// Two built-in palettes, switchable at runtime with `t` and selectable from
// config. Each theme defines colors for every element of the card.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    /// Parse a config value; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "dark" => ThemeKind::Dark,
            other => {
                tracing::warn!("Unknown theme {:?}, using Dark", other);
                ThemeKind::Dark
            }
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Resolved colors for the card
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub title: Color,

    // Copy button, idle and confirmed
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_done_bg: Color,

    // Preformatted JSON block
    pub code_bg: Color,
    pub code_fg: Color,

    pub status_bar: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_type: BorderType::Rounded,
            title: Color::Cyan,

            button_bg: Color::Rgb(59, 130, 246), // blue-500
            button_fg: Color::White,
            button_done_bg: Color::Rgb(37, 99, 235), // blue-600

            code_bg: Color::Rgb(30, 32, 36),
            code_fg: Color::Gray,

            status_bar: Color::Green,
            muted: Color::DarkGray,
            highlight: Color::Cyan,
            error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            title: Color::Black,

            button_bg: Color::Rgb(59, 130, 246),
            button_fg: Color::White,
            button_done_bg: Color::Rgb(37, 99, 235),

            code_bg: Color::Rgb(249, 250, 251), // gray-50
            code_fg: Color::Black,

            status_bar: Color::DarkGray,
            muted: Color::Gray,
            highlight: Color::Blue,
            error: Color::Red,
        }
    }
}
