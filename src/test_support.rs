//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::catalog::{
    CatalogError, CatalogItem, CatalogPage, CatalogSource, Category, Character, FetchKey, Planet,
    Starship,
};
use crate::core::state::{App, ViewState};

/// A source that records every call and answers with an empty page.
#[derive(Default)]
pub struct RecordingCatalog {
    pub calls: Mutex<Vec<FetchKey>>,
}

impl RecordingCatalog {
    pub fn calls(&self) -> Vec<FetchKey> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, key: FetchKey) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key);
        }
    }
}

#[async_trait]
impl CatalogSource for RecordingCatalog {
    fn name(&self) -> &str {
        "recording"
    }

    async fn list(&self, category: Category, page: u32) -> Result<CatalogPage, CatalogError> {
        self.record(FetchKey::List { category, page });
        Ok(page_of(vec![], false))
    }

    async fn search(&self, category: Category, query: &str) -> Result<CatalogPage, CatalogError> {
        self.record(FetchKey::Search {
            category,
            query: query.to_string(),
        });
        Ok(page_of(vec![], false))
    }
}

/// Creates a test App with a RecordingCatalog and default view state.
pub fn test_app() -> App {
    App::new(Arc::new(RecordingCatalog::default()), ViewState::default())
}

pub fn page_of(items: Vec<CatalogItem>, has_more: bool) -> CatalogPage {
    CatalogPage {
        total: items.len() as u32,
        items,
        has_more,
    }
}

pub fn character(name: &str) -> CatalogItem {
    CatalogItem::Character(Character {
        name: name.to_string(),
        height: "172".into(),
        mass: "77".into(),
        gender: "male".into(),
        birth_year: "19BBY".into(),
        ..Default::default()
    })
}

pub fn planet(name: &str) -> CatalogItem {
    CatalogItem::Planet(Planet {
        name: name.to_string(),
        climate: "arid".into(),
        terrain: "desert".into(),
        ..Default::default()
    })
}

pub fn starship(name: &str) -> CatalogItem {
    CatalogItem::Starship(Starship {
        name: name.to_string(),
        model: "YT-1300 light freighter".into(),
        starship_class: "Light freighter".into(),
        ..Default::default()
    })
}
