//! # TitleBar Component
//!
//! Top line: application name, a loading spinner, the status message and the
//! theme indicator on the right.
//!
//! Stateless. All props are copied in each frame:
//! - `status_message`: Core App state
//! - `is_loading`: Core App state
//! - `theme`: Core App state (view store)
//! - `spinner_frame`: TUI animation counter

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::Theme;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub status_message: String,
    pub is_loading: bool,
    pub theme: Theme,
    pub spinner_frame: usize,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(status_message: String, is_loading: bool, theme: Theme, spinner_frame: usize) -> Self {
        Self {
            status_message,
            is_loading,
            theme,
            spinner_frame,
            palette: Palette::for_theme(theme),
        }
    }

    fn theme_indicator(&self) -> &'static str {
        match self.theme {
            Theme::Light => "☾ dark [t]",
            Theme::Dark => "☀ light [t]",
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let indicator = self.theme_indicator();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(indicator.chars().count() as u16 + 1),
        ])
        .areas(area);

        let mut spans = vec![
            Span::styled(" Star Wars Explorer ", self.palette.filled()),
            Span::raw(" "),
        ];
        if self.is_loading {
            spans.push(Span::styled(
                format!("{} ", SPINNER[self.spinner_frame % SPINNER.len()]),
                self.palette.title(),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::styled(self.status_message.clone(), self.palette.dim()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), left);
        frame.render_widget(
            Paragraph::new(Span::styled(indicator, self.palette.title())).right_aligned(),
            right,
        );
    }
}
