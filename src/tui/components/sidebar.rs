//! # Sidebar Component
//!
//! The category navigator: one button per category and the search box.
//! It renders only; key handling lives in the TUI event loop, which routes
//! keystrokes to the `SearchBox` when it has focus.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::catalog::Category;
use crate::tui::component::Component;
use crate::tui::components::search_box::SearchBox;
use crate::tui::theme::Palette;

/// Transient render wrapper; the search box state lives in `TuiState`.
pub struct Sidebar<'a> {
    pub active: Category,
    pub search_box: &'a mut SearchBox,
    pub palette: Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: Category, search_box: &'a mut SearchBox, palette: Palette) -> Self {
        Self {
            active,
            search_box,
            palette,
        }
    }

    fn category_lines(&self) -> Vec<Line<'static>> {
        Category::ALL
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let label = format!(" {} {:<12}", i + 1, category.title());
                let style = if *category == self.active {
                    self.palette.filled()
                } else {
                    self.palette.base()
                };
                Line::from(Span::styled(label, style))
            })
            .collect()
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [heading, buttons, _, search, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled("Categories", self.palette.title())),
            heading,
        );
        frame.render_widget(Paragraph::new(self.category_lines()), buttons);

        self.search_box.category = self.active;
        self.search_box.palette = self.palette;
        self.search_box.render(frame, search);

        let hint_text = if self.search_box.focused {
            "Enter search  Esc back"
        } else {
            "/ to search"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint_text, self.palette.dim())),
            hint,
        );
    }
}
