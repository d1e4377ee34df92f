//! # Application State
//!
//! Core business state for Holocron. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn CatalogSource>  // remote collaborator
//! ├── view: ViewState                  // shared view-state store
//! │   ├── theme: Theme
//! │   ├── category: Category
//! │   ├── search_text: String          // what is in the search box
//! │   └── search_active: bool          // a non-empty search was submitted
//! ├── page: u32                        // requested listing page (1-based)
//! ├── results: Option<ResultPage>      // last successfully installed page
//! ├── selected: Option<usize>          // index into results.items
//! ├── is_loading: bool                 // a request is in flight
//! ├── error: Option<String>            // inline fetch error
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::{CatalogItem, CatalogSource, Category, FetchKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("invalid theme '{other}' (expected light or dark)")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The shared view-state store.
///
/// `search_active` is true only after a search with non-blank text was
/// submitted. Changing the category always clears both search fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub theme: Theme,
    pub category: Category,
    pub search_text: String,
    pub search_active: bool,
    /// Trimmed text of the last submitted search. Edits to `search_text`
    /// leave the displayed results alone until they are submitted.
    submitted_query: String,
}

impl ViewState {
    pub fn new(theme: Theme, category: Category) -> Self {
        Self {
            theme,
            category,
            ..Default::default()
        }
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.search_text.clear();
        self.search_active = false;
        self.submitted_query.clear();
    }

    /// Emptying the text also ends an active search: `search_active` never
    /// outlives a blank `search_text`.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        if self.search_text.trim().is_empty() {
            self.search_active = false;
            self.submitted_query.clear();
        }
    }

    /// Submitting blank text clears the search and returns to the listing.
    pub fn submit_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        let trimmed = self.search_text.trim();
        self.search_active = !trimmed.is_empty();
        self.submitted_query = if self.search_active {
            trimmed.to_string()
        } else {
            String::new()
        };
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn submitted_query(&self) -> Option<&str> {
        self.search_active.then_some(self.submitted_query.as_str())
    }
}

/// A result set as displayed. Never partially updated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub items: Vec<CatalogItem>,
    pub has_next: bool,
    /// `None` for search results, which are a single unpaginated set.
    pub page_number: Option<u32>,
    pub total: u32,
    /// Generation of the request that produced this page.
    pub generation: u64,
}

pub struct App {
    pub catalog: Arc<dyn CatalogSource>,
    pub view: ViewState,
    pub page: u32,
    pub results: Option<ResultPage>,
    pub selected: Option<usize>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: String,
    /// Generation of the most recently issued request.
    pub(crate) generation: u64,
    /// Key of the most recently issued request.
    pub(crate) last_key: Option<FetchKey>,
}

impl App {
    pub fn new(catalog: Arc<dyn CatalogSource>, view: ViewState) -> Self {
        Self {
            catalog,
            view,
            page: 1,
            results: None,
            selected: None,
            is_loading: false,
            error: None,
            status_message: String::new(),
            generation: 0,
            last_key: None,
        }
    }

    pub fn from_config(
        catalog: Arc<dyn CatalogSource>,
        config: &crate::core::config::ResolvedConfig,
    ) -> Self {
        Self::new(catalog, ViewState::new(config.theme, config.category))
    }

    /// What the result list should currently show, derived from the store.
    pub fn fetch_key(&self) -> FetchKey {
        let category = self.view.category;
        match self.view.submitted_query() {
            Some(query) => FetchKey::Search {
                category,
                query: query.to_string(),
            },
            None => FetchKey::List {
                category,
                page: self.page,
            },
        }
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        let index = self.selected?;
        self.results.as_ref()?.items.get(index)
    }

    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.results.as_ref().is_some_and(|r| r.has_next)
    }

    /// Paging controls are hidden while a search is active.
    pub fn pagination_visible(&self) -> bool {
        !self.view.search_active
    }
}
