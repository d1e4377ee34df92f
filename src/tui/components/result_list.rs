//! # Result List Component
//!
//! Cards for the current `ResultPage` plus the paging row.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultListState` (highlight cursor) lives in `TuiState`
//! - `ResultList` is created each frame with borrowed state and app props
//!
//! The highlight is presentation state only. The selected item (the one in
//! the detail panel) belongs to the core `App` and changes through actions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::catalog::Category;
use crate::core::detail;
use crate::core::state::ResultPage;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

/// Persistent state for the result list.
#[derive(Default)]
pub struct ResultListState {
    pub list_state: ListState,
    /// Generation of the page the highlight refers to.
    synced_generation: Option<u64>,
}

impl ResultListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move the highlight to the top whenever a different page is installed.
    pub fn sync(&mut self, results: Option<&ResultPage>) {
        let generation = results.map(|r| r.generation);
        if generation == self.synced_generation {
            return;
        }
        self.synced_generation = generation;
        let has_items = results.is_some_and(|r| !r.items.is_empty());
        self.list_state.select(has_items.then_some(0));
    }

    pub fn move_up(&mut self) {
        if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some(i.saturating_sub(1)));
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(next));
    }
}

/// Props for the paging row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub visible: bool,
    pub page: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Transient render wrapper for the result list.
pub struct ResultList<'a> {
    state: &'a mut ResultListState,
    results: &'a ResultPage,
    category: Category,
    selected: Option<usize>,
    paging: Paging,
    palette: Palette,
}

impl<'a> ResultList<'a> {
    pub fn new(
        state: &'a mut ResultListState,
        results: &'a ResultPage,
        category: Category,
        selected: Option<usize>,
        paging: Paging,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            results,
            category,
            selected,
            paging,
            palette,
        }
    }

    fn paging_line(&self) -> Line<'static> {
        if !self.paging.visible {
            return Line::from(vec![
                Span::styled(" ◀ Back to all results ", self.palette.filled()),
                Span::styled("  [b]", self.palette.dim()),
            ])
            .centered();
        }

        let button = |label: &'static str, enabled: bool| {
            if enabled {
                Span::styled(label, self.palette.title())
            } else {
                Span::styled(label, self.palette.dim().add_modifier(Modifier::DIM))
            }
        };
        Line::from(vec![
            button("[◀ Previous]", self.paging.prev_enabled),
            Span::raw(format!("   Page {}   ", self.paging.page)),
            button("[Next ▶]", self.paging.next_enabled),
        ])
        .centered()
    }
}

impl Component for ResultList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = match self.results.page_number {
            Some(_) => format!(" {} ({} total) ", self.category.title(), self.results.total),
            None => format!(" {}: {} found ", self.category.title(), self.results.items.len()),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border())
            .title(Span::styled(heading, self.palette.title()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [list_area, paging_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        if self.results.items.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No results.", self.palette.dim())).centered(),
                list_area,
            );
        } else {
            let width = list_area.width as usize;
            let badge = self.category.badge();
            let items: Vec<ListItem> = self
                .results
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let marker = if self.selected == Some(i) { "▸ " } else { "  " };
                    let name = item.name();
                    let pad = width
                        .saturating_sub(marker.width() + name.width() + badge.width() + 3);
                    let header = Line::from(vec![
                        Span::styled(marker, self.palette.title()),
                        Span::styled(name.to_string(), self.palette.base().add_modifier(Modifier::BOLD)),
                        Span::raw(" ".repeat(pad)),
                        Span::styled(format!(" {badge} "), self.palette.filled()),
                    ]);
                    let summary = Line::from(Span::styled(
                        format!("  {}", truncate(&detail::summary(item), width.saturating_sub(2))),
                        self.palette.dim(),
                    ));
                    ListItem::new(vec![header, summary])
                })
                .collect();

            let list = List::new(items).highlight_style(self.palette.highlight());
            frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
        }

        frame.render_widget(Paragraph::new(self.paging_line()), paging_area);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.to_string().width() > max_width - 3 {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}
