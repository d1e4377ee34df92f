//! SWAPI-compatible catalog source over HTTP.
//!
//! Endpoints (all `GET`, JSON):
//! - `<base>/<category>/?page=<n>`
//! - `<base>/<category>/?search=<text>`
//!
//! Both return the same `{ count, next, previous, results }` envelope.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{CatalogError, CatalogSource};
use super::types::{ApiResponse, CatalogItem, CatalogPage, Category};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

pub struct SwapiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SwapiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public service)
    /// * `timeout` - Optional per-request timeout
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
            reqwest::Client::new()
        });

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, category: Category) -> String {
        format!("{}/{}/", self.base_url, category.path())
    }

    /// Sends the request and decodes the envelope for the category's shape.
    async fn get_page(
        &self,
        category: Category,
        query: &[(&str, String)],
    ) -> Result<CatalogPage, CatalogError> {
        let url = self.endpoint(category);
        info!("Catalog request: GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        debug!("Catalog response body: {} bytes", body.len());

        let page = match category {
            Category::People => decode(&body, CatalogItem::Character)?,
            Category::Planets => decode(&body, CatalogItem::Planet)?,
            Category::Starships => decode(&body, CatalogItem::Starship)?,
        };
        info!(
            "Catalog page decoded: {} items, has_more={}, total={}",
            page.items.len(),
            page.has_more,
            page.total
        );
        Ok(page)
    }
}

fn decode<T: DeserializeOwned>(
    body: &str,
    wrap: fn(T) -> CatalogItem,
) -> Result<CatalogPage, CatalogError> {
    serde_json::from_str::<ApiResponse<T>>(body)
        .map(|response| response.into_page(wrap))
        .map_err(|e| CatalogError::Parse(e.to_string()))
}

#[async_trait]
impl CatalogSource for SwapiClient {
    fn name(&self) -> &str {
        "swapi"
    }

    async fn list(&self, category: Category, page: u32) -> Result<CatalogPage, CatalogError> {
        self.get_page(category, &[("page", page.to_string())]).await
    }

    async fn search(&self, category: Category, query: &str) -> Result<CatalogPage, CatalogError> {
        self.get_page(category, &[("search", query.to_string())]).await
    }
}
