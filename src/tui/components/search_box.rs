//! # SearchBox Component
//!
//! Single-line text input for the name search.
//!
//! The buffer is internal state; the category (for the placeholder) and the
//! focus flag are props. Every edit is reported so the store's search text
//! stays in sync with what is on screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::catalog::Category;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Text changed; carries the full buffer
    Edited(String),
    /// Enter pressed; carries the full buffer (may be blank)
    Submitted(String),
    /// Esc pressed, leave the box
    Cancel,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer
    cursor: usize,
    /// Active category, for the placeholder (Prop)
    pub category: Category,
    /// Whether keystrokes are routed here (Prop)
    pub focused: bool,
    /// Colors for the active theme (Prop)
    pub palette: Palette,
}

impl SearchBox {
    pub fn new(category: Category, palette: Palette) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            category,
            focused: false,
            palette,
        }
    }

    /// Replace the buffer, e.g. when a category change clears the search.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn placeholder(&self) -> String {
        format!("Search {}", self.category)
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.palette.title()
        } else {
            self.palette.border()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(" Search ", self.palette.title()));

        let inner_width = area.width.saturating_sub(2) as usize;
        let before_cursor = &self.buffer[..self.cursor];
        let cursor_col = before_cursor.width();

        // Keep the cursor visible by dropping leading chars when the text overflows
        let mut skip = 0;
        while cursor_col - self.buffer[..skip].width() >= inner_width.max(1) {
            skip += self.buffer[skip..].chars().next().map_or(1, char::len_utf8);
        }

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(self.placeholder(), self.palette.dim()))
        } else {
            Line::from(Span::raw(&self.buffer[skip..]))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused {
            let x = area.x + 1 + (cursor_col - self.buffer[..skip].width()) as u16;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::Edited(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Single-line input: newlines become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(SearchEvent::Edited(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::Edited(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submitted(self.buffer.clone())),
            TuiEvent::Escape => Some(SearchEvent::Cancel),
            _ => None,
        }
    }
}
