//! Cover art lookup through an external image search API.
//!
//! The search is optional and never touches the collection: callers get a list
//! of candidate URLs and decide themselves whether to store one as a game's
//! `imageUrl`.

use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const MAX_RESULTS: usize = 10;
const REQUEST_TIMEOUT_SECS: u64 = 20;

pub trait ImageSearch {
    /// Returns up to `limit` image URLs for `query`.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<String>>;
}

/// "<title> <platform> box art"
pub fn cover_query(title: &str, platform: &str) -> String {
    format!("{} {} box art", title.trim(), platform.trim())
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Extracts result links from a Custom Search style JSON body.
pub fn parse_search_response(body: &str, limit: usize) -> Result<Vec<String>> {
    let parsed: SearchResponse = serde_json::from_str(body)
        .map_err(|e| ShelfError::ImageSearch(format!("unexpected response: {}", e)))?;

    if let Some(err) = parsed.error {
        return Err(ShelfError::ImageSearch(err.message));
    }

    Ok(parsed
        .items
        .into_iter()
        .filter_map(|item| item.link)
        .filter(|link| !link.trim().is_empty())
        .take(limit.min(MAX_RESULTS))
        .collect())
}

/// Keyed HTTP GET against a Google Custom Search compatible endpoint.
pub struct HttpImageSearch {
    client: Client,
    endpoint: String,
    api_key: String,
    engine_id: Option<String>,
}

impl HttpImageSearch {
    pub fn new(endpoint: String, api_key: String, engine_id: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ShelfError::ImageSearch(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            engine_id,
        })
    }

    pub fn from_config(config: &ShelfConfig) -> Result<Self> {
        let api_key = config.image_search_key().ok_or_else(|| {
            ShelfError::ImageSearch(
                "no API key configured (set image-search-key or GAMESHELF_IMAGE_SEARCH_KEY)"
                    .to_string(),
            )
        })?;
        Self::new(
            config.image_search.endpoint.clone(),
            api_key,
            config.image_search.engine_id.clone(),
        )
    }
}

impl ImageSearch for HttpImageSearch {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let num = limit.clamp(1, MAX_RESULTS).to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("key", self.api_key.as_str()),
            ("q", query),
            ("searchType", "image"),
            ("num", num.as_str()),
        ];
        if let Some(cx) = &self.engine_id {
            params.push(("cx", cx.as_str()));
        }

        debug!(endpoint = %self.endpoint, query, "image search request");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .map_err(|e| ShelfError::ImageSearch(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ShelfError::ImageSearch(e.to_string()))?;

        if !status.is_success() {
            // API errors come back as JSON with a message; prefer it over the bare status.
            return match parse_search_response(&body, limit) {
                Err(e) => Err(e),
                Ok(_) => Err(ShelfError::ImageSearch(format!(
                    "request failed with status {}",
                    status
                ))),
            };
        }

        parse_search_response(&body, limit)
    }
}
