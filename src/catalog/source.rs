use std::fmt;

use async_trait::async_trait;

use super::types::{CatalogPage, Category};

/// User-facing text for any failed fetch. Timeouts, 4xx and 5xx all collapse to this.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// Errors that can occur while talking to the catalog service.
/// The variants only matter for logs; the UI shows `FETCH_FAILED_MESSAGE`.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the expected envelope.
    Parse(String),
}

impl CatalogError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// What to ask the catalog for. Compared by value to decide whether a refetch is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchKey {
    /// Paginated listing; `page` starts at 1.
    List { category: Category, page: u32 },
    /// Unpaginated name search.
    Search { category: Category, query: String },
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// `GET /<category>/?page=<n>`
    async fn list(&self, category: Category, page: u32) -> Result<CatalogPage, CatalogError>;

    /// `GET /<category>/?search=<text>`
    async fn search(&self, category: Category, query: &str) -> Result<CatalogPage, CatalogError>;

    /// Dispatches a `FetchKey` to the matching endpoint.
    async fn fetch(&self, key: &FetchKey) -> Result<CatalogPage, CatalogError> {
        match key {
            FetchKey::List { category, page } => self.list(*category, *page).await,
            FetchKey::Search { category, query } => self.search(*category, query).await,
        }
    }
}
