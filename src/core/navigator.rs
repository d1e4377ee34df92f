//! # Category Navigator
//!
//! Input capture for the category buttons and the search box. Translates raw
//! user input into `Action` values for the store; performs no I/O.

use crate::catalog::{Category, CategoryError};
use crate::core::action::Action;

/// Select a category by its endpoint name. Unknown names are rejected.
pub fn select_category(name: &str) -> Result<Action, CategoryError> {
    name.parse::<Category>().map(Action::SelectCategory)
}

/// Select a category by its 1-based button position.
pub fn select_category_slot(slot: usize) -> Result<Action, CategoryError> {
    slot.checked_sub(1)
        .and_then(|i| Category::ALL.get(i).copied())
        .map(Action::SelectCategory)
        .ok_or_else(|| CategoryError::InvalidCategory(format!("#{slot}")))
}

pub fn on_search_submit(text: &str) -> Action {
    Action::SubmitSearch(text.to_string())
}

pub fn on_search_edit(text: &str) -> Action {
    Action::EditSearch(text.to_string())
}
