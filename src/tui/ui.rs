//! Frame layout: title bar, sidebar + main area, key hints.
//!
//! ```text
//! ┌ Star Wars Explorer ───────────────── status ── theme ┐
//! │ sidebar      │ result cards        │ detail panel     │
//! │ (categories, │                     │ (when selected)  │
//! │  search)     │ paging row          │                  │
//! └ key hints ───────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::detail::detail_view;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DetailPanel, Paging, ResultList, Sidebar, TitleBar};
use crate::tui::theme::Palette;
use crate::tui::{InputMode, TuiState};

const SIDEBAR_WIDTH: u16 = 30;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let palette = Palette::for_theme(app.view.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [title_area, body_area, hint_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, main_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);

    TitleBar::new(
        app.status_message.clone(),
        app.is_loading,
        app.view.theme,
        spinner_frame,
    )
    .render(frame, title_area);

    tui.search_box.focused = tui.input_mode == InputMode::Search;
    Sidebar::new(app.view.category, &mut tui.search_box, palette).render(frame, sidebar_area);

    draw_main(frame, main_area, app, tui, palette);

    frame.render_widget(
        Paragraph::new(Span::styled(key_hints(tui.input_mode), palette.dim())),
        hint_area,
    );
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    tui.result_list.sync(app.results.as_ref());

    let Some(results) = &app.results else {
        // Nothing to show yet: the error or the loader takes the whole area
        match &app.error {
            Some(message) => draw_error_view(frame, area, message, palette),
            None if app.is_loading => draw_centered(frame, area, "Loading...", palette),
            None => {}
        }
        return;
    };

    let list_area = match &app.error {
        Some(message) => {
            let [error_area, rest] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
            let line = Line::from(vec![
                Span::styled(format!(" {message} "), palette.error()),
                Span::styled(" r retry", palette.dim()),
            ]);
            frame.render_widget(Paragraph::new(line), error_area);
            rest
        }
        None => area,
    };

    let view = detail_view(app.selected_item(), app.view.category);
    let (list_area, detail_area) = match view {
        Some(_) => {
            let [left, right] = Layout::horizontal([
                Constraint::Percentage(55),
                Constraint::Percentage(45),
            ])
            .areas(list_area);
            (left, Some(right))
        }
        None => (list_area, None),
    };

    let paging = Paging {
        visible: app.pagination_visible(),
        page: app.page,
        prev_enabled: app.prev_enabled(),
        next_enabled: app.next_enabled(),
    };
    ResultList::new(
        &mut tui.result_list,
        results,
        app.view.category,
        app.selected,
        paging,
        palette,
    )
    .render(frame, list_area);

    if let Some(detail_area) = detail_area {
        DetailPanel::new(view.as_ref(), palette).render(frame, detail_area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str, palette: Palette) {
    let text = vec![
        Line::from(Span::styled(message.to_string(), palette.error())),
        Line::from(""),
        Line::from(Span::styled("Press r to retry", palette.dim())),
    ];
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(text).centered().wrap(Wrap { trim: true }),
        middle,
    );
}

fn draw_centered(frame: &mut Frame, area: Rect, text: &str, palette: Palette) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), palette.dim())).centered(),
        middle,
    );
}

fn key_hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Browse => {
            " 1-3/Tab category  ↑↓ move  Enter details  ←→ page  / search  b back  t theme  r retry  q quit"
        }
        InputMode::Search => " type to edit  Enter search  Esc back to browsing  Ctrl+C quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::core::action::{Action, Effect, update};
    use crate::test_support::{character, page_of, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn issue(app: &mut App) -> u64 {
        match crate::core::action::refresh(app, false) {
            Effect::Fetch(request) => request.generation,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_without_results_shows_loader() {
        let mut app = test_app();
        issue(&mut app);
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Star Wars Explorer"));
        assert!(text.contains("Loading..."));
        assert!(text.contains("Categories"));
    }

    #[test]
    fn test_error_without_results_fills_main_view() {
        let mut app = test_app();
        let generation = issue(&mut app);
        update(
            &mut app,
            Action::FetchCompleted {
                generation,
                outcome: Err(CatalogError::Network("connection refused".into())),
            },
        );
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Failed to fetch data. Please try again."));
        assert!(text.contains("Press r to retry"));
        assert!(!text.contains("connection refused"));
    }

    #[test]
    fn test_selected_item_opens_detail_panel() {
        let mut app = test_app();
        let generation = issue(&mut app);
        update(
            &mut app,
            Action::FetchCompleted {
                generation,
                outcome: Ok(page_of(vec![character("Luke Skywalker")], true)),
            },
        );
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Luke Skywalker"));
        assert!(!text.contains("172 cm"));

        update(&mut app, Action::SelectItem(0));
        let text = render(&app, &mut tui);
        assert!(text.contains("172 cm"));
        assert!(text.contains("Esc close"));
    }

    #[test]
    fn test_search_mode_changes_hints() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        tui.input_mode = InputMode::Search;
        let text = render(&app, &mut tui);
        assert!(text.contains("Enter search"));
        assert!(tui.search_box.focused);
    }
}
