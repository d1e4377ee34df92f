//! # Actions
//!
//! Everything that can happen in Holocron becomes an `Action`.
//! User picks a category? That's `Action::SelectCategory(category)`.
//! A request comes back? That's `Action::FetchCompleted { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the runner must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! After every store mutation the fetcher reconciles: it derives the
//! `FetchKey` for the current state and, when that key differs by value from
//! the key of the last issued request, issues a new one tagged with a fresh
//! generation. Completions carrying an older generation are dropped.

use log::{debug, info, warn};

use crate::catalog::{CatalogError, CatalogPage, Category, FetchKey};
use crate::core::state::{App, ResultPage};

#[derive(Debug)]
pub enum Action {
    SelectCategory(Category),
    EditSearch(String),
    SubmitSearch(String),
    /// "Back to all results": clears the search and returns to page 1.
    ClearSearch,
    ToggleTheme,
    NextPage,
    PrevPage,
    SelectItem(usize),
    ClearSelection,
    /// Re-issue the current request after a failure.
    Retry,
    FetchCompleted {
        generation: u64,
        outcome: Result<CatalogPage, CatalogError>,
    },
    Quit,
}

/// A request the runner should send to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub key: FetchKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectCategory(category) => {
            if app.view.category != category {
                // The old page has another shape; never render it under the new heading
                app.results = None;
            }
            app.view.set_category(category);
            app.page = 1;
            app.selected = None;
            refresh(app, false)
        }
        Action::EditSearch(text) => {
            let was_active = app.view.search_active;
            app.view.set_search_text(text);
            if was_active && !app.view.search_active {
                // Erasing the query is the same as going back to all results
                app.page = 1;
                return refresh(app, false);
            }
            Effect::None
        }
        Action::SubmitSearch(text) => {
            app.view.submit_search(text);
            app.page = 1;
            refresh(app, false)
        }
        Action::ClearSearch => {
            if !app.view.search_active {
                return Effect::None;
            }
            app.view.submit_search("");
            app.page = 1;
            refresh(app, false)
        }
        Action::ToggleTheme => {
            app.view.toggle_theme();
            app.status_message = format!("Theme: {}", app.view.theme.label());
            Effect::None
        }
        Action::NextPage => {
            if !app.pagination_visible() || !app.next_enabled() {
                return Effect::None;
            }
            app.page += 1;
            refresh(app, false)
        }
        Action::PrevPage => {
            if !app.pagination_visible() || !app.prev_enabled() {
                return Effect::None;
            }
            app.page -= 1;
            refresh(app, false)
        }
        Action::SelectItem(index) => {
            let in_range = app.results.as_ref().is_some_and(|r| index < r.items.len());
            if in_range {
                app.selected = Some(index);
            }
            Effect::None
        }
        Action::ClearSelection => {
            app.selected = None;
            Effect::None
        }
        Action::Retry => refresh(app, true),
        Action::FetchCompleted {
            generation,
            outcome,
        } => {
            apply_completion(app, generation, outcome);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Issue a request for the current state if it differs from the last one.
///
/// `force` re-issues an unchanged key. A failed request leaves no key
/// behind, so any re-trigger after a failure fetches again.
pub fn refresh(app: &mut App, force: bool) -> Effect {
    let key = app.fetch_key();
    if !force && app.last_key.as_ref() == Some(&key) {
        debug!("Fetch key unchanged, no request: {:?}", key);
        return Effect::None;
    }

    app.generation += 1;
    app.last_key = Some(key.clone());
    app.is_loading = true;
    app.error = None;
    app.status_message = match &key {
        FetchKey::List { category, page } => format!("Loading {category} (page {page})..."),
        FetchKey::Search { category, query } => format!("Searching {category} for \"{query}\"..."),
    };
    info!("Issuing fetch generation {}: {:?}", app.generation, key);

    Effect::Fetch(FetchRequest {
        generation: app.generation,
        key,
    })
}

fn apply_completion(
    app: &mut App,
    generation: u64,
    outcome: Result<CatalogPage, CatalogError>,
) {
    if generation != app.generation {
        debug!(
            "Discarding stale response: generation {} (latest {})",
            generation, app.generation
        );
        return;
    }

    app.is_loading = false;
    match outcome {
        Ok(page) => {
            let page_number = match app.last_key {
                Some(FetchKey::List { page, .. }) => Some(page),
                _ => None,
            };
            let has_next = page_number.is_some() && page.has_more;
            info!(
                "Installing page: generation={}, items={}, has_next={}",
                generation,
                page.items.len(),
                has_next
            );
            app.status_message = match page_number {
                Some(n) => format!("Page {n} of {} results", page.total),
                None => match page.items.len() {
                    1 => String::from("1 match"),
                    n => format!("{n} matches"),
                },
            };
            app.results = Some(ResultPage {
                items: page.items,
                has_next,
                page_number,
                total: page.total,
                generation,
            });
            app.selected = None;
            app.error = None;
        }
        Err(e) => {
            warn!("Fetch generation {} failed: {}", generation, e);
            // The page counter follows the page on screen, not the one that failed
            let failed_listing = matches!(app.last_key, Some(FetchKey::List { .. }));
            if failed_listing
                && let Some(shown) = app.results.as_ref().and_then(|r| r.page_number)
            {
                app.page = shown;
            }
            app.last_key = None;
            app.error = Some(e.user_message().to_string());
            app.status_message = String::from("Request failed");
        }
    }
}
