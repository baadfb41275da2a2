//! Search-as-you-type against the storefront backend.

use async_trait::async_trait;
use std::sync::Arc;
use tienda_debounce::{Action, Debouncer};
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::notify::SearchResults;

/// Debounced product search.
///
/// Every keystroke calls [`search`](Self::search); one request goes out per
/// pause in typing, for the latest query only.
pub struct SearchClient {
    debouncer: Debouncer<String>,
}

impl SearchClient {
    /// Build a search client. Must be called inside a tokio runtime.
    pub fn new(config: ClientConfig, results: Arc<dyn SearchResults>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_http(http, config, results))
    }

    pub fn with_http(
        http: reqwest::Client,
        config: ClientConfig,
        results: Arc<dyn SearchResults>,
    ) -> Self {
        let debouncer = Debouncer::with_action(
            config.search_debounce(),
            RunSearch {
                http,
                url: config.url("/buscar"),
                min_len: config.min_search_len,
                results,
            },
        );
        Self { debouncer }
    }

    pub fn search(&self, query: impl Into<String>) {
        self.debouncer.invoke(query.into());
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }
}

struct RunSearch {
    http: reqwest::Client,
    url: String,
    min_len: usize,
    results: Arc<dyn SearchResults>,
}

impl RunSearch {
    async fn fetch(&self, query: &str) -> Result<String> {
        let html = self
            .http
            .get(&self.url)
            .query(&[("q", query)])
            .send()
            .await?
            .text()
            .await?;
        Ok(html)
    }
}

#[async_trait]
impl Action<String> for RunSearch {
    async fn run(&self, query: String) {
        if query.chars().count() < self.min_len {
            self.results.hide();
            return;
        }

        match self.fetch(&query).await {
            Ok(html) => {
                debug!(%query, bytes = html.len(), "search results received");
                self.results.show(html);
            }
            Err(e) => error!(error = %e, %query, "Search error"),
        }
    }
}
