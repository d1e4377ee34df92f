//! # Detail Panel
//!
//! Draws a `DetailView` as a two-column label/value table. Nothing is drawn
//! when there is no view, so callers can hand it `detail_view(..)` directly.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Cell, Padding, Row, Table};

use crate::core::detail::DetailView;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct DetailPanel<'a> {
    pub view: Option<&'a DetailView>,
    pub palette: Palette,
}

impl<'a> DetailPanel<'a> {
    pub fn new(view: Option<&'a DetailView>, palette: Palette) -> Self {
        Self { view, palette }
    }
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(view) = self.view else {
            return;
        };

        let label_width = view
            .rows
            .iter()
            .map(|r| r.label.len())
            .max()
            .unwrap_or(0) as u16;

        let rows = view.rows.iter().map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(r.label, self.palette.dim())),
                Cell::from(Span::styled(r.value.clone(), self.palette.base())),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(label_width + 1), Constraint::Min(0)])
            .column_spacing(2)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.palette.accent_border())
                    .padding(Padding::horizontal(1))
                    .title(Span::styled(format!(" {} ", view.title), self.palette.title()))
                    .title_bottom(Span::styled(" Esc close ", self.palette.dim())),
            );
        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::core::detail::detail_view;
    use crate::core::state::Theme;
    use crate::test_support::{character, planet};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(view: Option<&DetailView>) -> String {
        let backend = TestBackend::new(50, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DetailPanel::new(view, Palette::for_theme(Theme::Dark)).render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_title_and_rows() {
        let luke = character("Luke Skywalker");
        let view = detail_view(Some(&luke), Category::People);
        let text = render(view.as_ref());
        assert!(text.contains("Luke Skywalker"));
        assert!(text.contains("Height"));
        assert!(text.contains("172 cm"));
        assert!(text.contains("77 kg"));
    }

    #[test]
    fn test_renders_nothing_without_a_view() {
        let tatooine = planet("Tatooine");
        let view = detail_view(Some(&tatooine), Category::People);
        assert!(view.is_none());
        let text = render(view.as_ref());
        assert!(text.trim().is_empty());
    }
}
