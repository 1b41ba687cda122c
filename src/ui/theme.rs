//! Centralized theming for the quill TUI
//!
//! Single source of truth for all colors and styles used throughout the
//! application.

use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use crate::config::ThemeVariant;

/// Global theme variant storage (set once at startup)
static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

/// Initialize the theme variant (call once at startup)
pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

pub struct Theme;

impl Theme {
    fn fg_primary() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(224, 222, 244),
            ThemeVariant::HighContrast => Color::White,
        }
    }

    fn fg_secondary() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(144, 140, 170),
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    fn fg_muted() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(110, 106, 134),
            ThemeVariant::HighContrast => Color::DarkGray,
        }
    }

    fn fg_accent() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(125, 207, 255),
            ThemeVariant::HighContrast => Color::Cyan,
        }
    }

    fn fg_error() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(235, 111, 146),
            ThemeVariant::HighContrast => Color::Red,
        }
    }

    fn bg_selection() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(42, 42, 62),
            ThemeVariant::HighContrast => Color::Blue,
        }
    }

    fn bg_status() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(30, 30, 46),
            ThemeVariant::HighContrast => Color::Black,
        }
    }

    pub fn text() -> Style {
        Style::default().fg(Self::fg_primary())
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Self::fg_secondary())
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Self::fg_muted())
    }

    pub fn text_accent() -> Style {
        Style::default()
            .fg(Self::fg_accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_text() -> Style {
        Style::default().fg(Self::fg_error())
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::fg_accent())
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::fg_primary())
            .bg(Self::bg_selection())
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::fg_muted())
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::fg_accent())
    }

    pub fn border_error() -> Style {
        Style::default().fg(Self::fg_error())
    }

    pub fn status_bar() -> Style {
        Style::default()
            .fg(Self::fg_secondary())
            .bg(Self::bg_status())
    }

    pub fn help_key() -> Style {
        Style::default()
            .fg(Self::fg_accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Self::fg_secondary())
    }
}
