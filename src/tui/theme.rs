//! Color palettes for the light and dark themes.
//!
//! The accent is the same yellow in both; surfaces and text swap.

use ratatui::style::{Color, Modifier, Style};

use crate::core::state::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub accent: Color,
    /// Foreground used on top of `accent` (filled buttons, badges)
    pub on_accent: Color,
    pub highlight_bg: Color,
    pub error: Color,
}

const YELLOW: Color = Color::Rgb(250, 176, 5);

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: Color::Rgb(255, 255, 255),
                text: Color::Rgb(33, 37, 41),
                text_dim: Color::Rgb(134, 142, 150),
                border: Color::Rgb(206, 212, 218),
                accent: YELLOW,
                on_accent: Color::Rgb(26, 27, 30),
                highlight_bg: Color::Rgb(241, 243, 245),
                error: Color::Rgb(224, 49, 49),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(26, 27, 30),
                text: Color::Rgb(193, 194, 197),
                text_dim: Color::Rgb(144, 146, 150),
                border: Color::Rgb(55, 58, 64),
                accent: YELLOW,
                on_accent: Color::Rgb(26, 27, 30),
                highlight_bg: Color::Rgb(44, 46, 51),
                error: Color::Rgb(255, 107, 107),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn accent_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn filled(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default().bg(self.highlight_bg).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
