//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, completed
//!   fetches or terminal resize.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::catalog::CatalogSource;
use crate::core::action::{Action, Effect, FetchRequest, refresh, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigator;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ResultListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Palette;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands drive the navigator, the list and paging.
    Browse,
    /// Keystrokes edit the search box. Esc returns to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub result_list: ResultListState,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut search_box = SearchBox::new(app.view.category, Palette::for_theme(app.view.theme));
        search_box.set_text(&app.view.search_text);
        Self {
            search_box,
            result_list: ResultListState::new(),
            input_mode: InputMode::Browse,
        }
    }

    /// Follow store changes the box did not originate (category switch, back to all).
    fn sync_search_box(&mut self, app: &App) {
        if self.search_box.buffer != app.view.search_text {
            self.search_box.set_text(&app.view.search_text);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig, catalog: Arc<dyn CatalogSource>) -> std::io::Result<()> {
    info!("Using catalog source: {}", catalog.name());
    let mut app = App::from_config(catalog, &config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // First page for the configured category
    if let Effect::Fetch(request) = refresh(&mut app, false) {
        spawn_fetch(request, app.catalog.clone(), tx.clone());
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = translate(&event, &app, &mut tui) else {
                continue;
            };
            debug!("Key mapped to {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::Fetch(request) => spawn_fetch(request, app.catalog.clone(), tx.clone()),
                Effect::None => {}
            }
            tui.sync_search_box(&app);
        }

        if should_quit {
            break;
        }

        // Completed fetches from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if let Effect::Fetch(request) = update(&mut app, action) {
                spawn_fetch(request, app.catalog.clone(), tx.clone());
            }
        }
    }

    info!("Holocron shutting down");
    ratatui::restore();
    Ok(())
}

/// Map a terminal event to a core action for the current input mode.
///
/// Pure presentation changes (mode switches, list highlight) are applied to
/// `tui` directly and yield `None`.
fn translate(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    // Ctrl+C always quits regardless of mode
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    match tui.input_mode {
        InputMode::Search => match tui.search_box.handle_event(event)? {
            SearchEvent::Edited(text) => Some(navigator::on_search_edit(&text)),
            SearchEvent::Submitted(text) => {
                tui.input_mode = InputMode::Browse;
                Some(navigator::on_search_submit(&text))
            }
            SearchEvent::Cancel => {
                tui.input_mode = InputMode::Browse;
                None
            }
        },
        InputMode::Browse => match event {
            TuiEvent::InputChar(c @ '1'..='9') => {
                let slot = c.to_digit(10).unwrap_or(0) as usize;
                match navigator::select_category_slot(slot) {
                    Ok(action) => Some(action),
                    Err(e) => {
                        debug!("Ignoring category key: {}", e);
                        None
                    }
                }
            }
            TuiEvent::Tab => Some(Action::SelectCategory(app.view.category.next())),
            TuiEvent::CursorUp => {
                tui.result_list.move_up();
                None
            }
            TuiEvent::CursorDown => {
                let len = app.results.as_ref().map_or(0, |r| r.items.len());
                tui.result_list.move_down(len);
                None
            }
            TuiEvent::Submit => tui.result_list.highlighted().map(Action::SelectItem),
            TuiEvent::CursorLeft | TuiEvent::InputChar('p') => Some(Action::PrevPage),
            TuiEvent::CursorRight | TuiEvent::InputChar('n') => Some(Action::NextPage),
            TuiEvent::InputChar('/') => {
                tui.input_mode = InputMode::Search;
                None
            }
            // Pasting while browsing goes straight into the search box
            TuiEvent::Paste(_) => {
                tui.input_mode = InputMode::Search;
                match tui.search_box.handle_event(event)? {
                    SearchEvent::Edited(text) => Some(navigator::on_search_edit(&text)),
                    _ => None,
                }
            }
            TuiEvent::InputChar('b') => Some(Action::ClearSearch),
            TuiEvent::InputChar('t') => Some(Action::ToggleTheme),
            TuiEvent::InputChar('r') => Some(Action::Retry),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::Escape => Some(Action::ClearSelection),
            _ => None,
        },
    }
}

fn spawn_fetch(request: FetchRequest, catalog: Arc<dyn CatalogSource>, tx: mpsc::Sender<Action>) {
    let FetchRequest { generation, key } = request;
    info!("Spawning fetch: generation={} key={:?}", generation, key);
    tokio::spawn(async move {
        let outcome = catalog.fetch(&key).await;
        if let Err(e) = &outcome {
            warn!("Fetch generation {} failed: {}", generation, e);
        }
        if tx
            .send(Action::FetchCompleted {
                generation,
                outcome,
            })
            .is_err()
        {
            warn!("Failed to send fetch result for generation {}: receiver dropped", generation);
        }
    });
}
