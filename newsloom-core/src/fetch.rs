//! Fetch boundary for proportionally sampled article sets.
//!
//! The trait is the pluggable seam; [`ApiClient`] implements the existing
//! `/api/feed` POST contract over it.

use async_trait::async_trait;
use newsloom_model::{Article, Feed, MixQuota};
use serde_json::{Value, json};
use thiserror::Error;

use crate::constants::feed::DEFAULT_FEED_SIZE;
use crate::mix::{selected_to_mix, weights_to_mix};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed API returned status {0}")]
    Status(u16),
}

/// Source of articles for a quota. Implementations must tolerate an empty
/// quota by returning an empty list without issuing a request.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_articles(
        &self,
        mix: &MixQuota,
        size: u32,
    ) -> Result<Vec<Article>, FetchError>;
}

/// Resolve the quota for a feed: explicit weights win, an unweighted
/// selection falls back to an even split, anything else is empty.
pub fn mix_for_feed(feed: &Feed, size: u32) -> MixQuota {
    if !feed.weights.is_empty() {
        weights_to_mix(&feed.weights, size)
    } else if !feed.selected.is_empty() {
        selected_to_mix(&feed.selected, size)
    } else {
        MixQuota::new()
    }
}

/// HTTP client for the feed API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ArticleSource for ApiClient {
    async fn fetch_articles(
        &self,
        mix: &MixQuota,
        size: u32,
    ) -> Result<Vec<Article>, FetchError> {
        if mix.is_empty() {
            return Ok(Vec::new());
        }

        log::debug!(
            "feed request: size={size} categories={}",
            mix.len()
        );

        let response = self
            .http
            .post(format!("{}/api/feed", self.base_url))
            .json(&json!({
                "mix": mix,
                "size": size,
                "mode": "initial",
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let articles: Vec<Article> = body
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Article::decode).collect())
            .unwrap_or_default();

        log::debug!("feed response: {} articles", articles.len());
        Ok(articles)
    }
}

/// Convenience wrapper using the default result-set size.
pub async fn fetch_feed(
    source: &dyn ArticleSource,
    feed: &Feed,
) -> Result<Vec<Article>, FetchError> {
    let mix = mix_for_feed(feed, DEFAULT_FEED_SIZE);
    source.fetch_articles(&mix, DEFAULT_FEED_SIZE).await
}
