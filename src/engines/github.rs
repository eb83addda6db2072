//! GitHub search adapter
//!
//! Queries the user and repository search endpoints in parallel, merges the
//! payloads into `ResultItem`s sorted by display text, and turns every
//! expected failure into an error message on the outcome.

use crate::autocomplete::SearchProvider;
use crate::config::GithubSettings;
use crate::network::{HttpRequest, Transport};
use crate::results::{sort_by_display_text, ResultItem, SearchOutcome};
use crate::{Error, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// One page of a GitHub search response
#[derive(Debug, Deserialize)]
struct SearchPage {
    items: Vec<RawItem>,
}

/// A user or repository entry; users carry `login`, repositories `full_name`
#[derive(Debug, Deserialize)]
struct RawItem {
    login: Option<String>,
    full_name: Option<String>,
    avatar_url: Option<String>,
    owner: Option<RawOwner>,
    html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    avatar_url: Option<String>,
}

impl RawItem {
    fn into_result_item(self) -> Result<ResultItem> {
        let display_text = non_empty(self.login)
            .or_else(|| non_empty(self.full_name))
            .ok_or(Error::WrongFormat)?;

        let image_url = non_empty(self.avatar_url)
            .or_else(|| self.owner.and_then(|owner| non_empty(owner.avatar_url)));

        Ok(ResultItem {
            display_text,
            image_url,
            url: self.html_url,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Search provider backed by the GitHub search API
pub struct GithubSearch {
    transport: Arc<dyn Transport>,
    endpoints: Vec<Url>,
    token: Option<String>,
}

impl GithubSearch {
    /// Create an adapter over the given endpoint templates
    pub fn new(transport: Arc<dyn Transport>, endpoints: Vec<Url>) -> Self {
        Self {
            transport,
            endpoints,
            token: None,
        }
    }

    /// Create an adapter from settings
    pub fn from_settings(
        settings: &GithubSettings,
        transport: Arc<dyn Transport>,
    ) -> anyhow::Result<Self> {
        let mut search = Self::new(transport, settings.endpoint_urls()?);
        search.token = settings.token.clone();
        Ok(search)
    }

    /// Authenticate requests with a personal access token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn endpoints(&self) -> &[Url] {
        &self.endpoints
    }

    /// The endpoint with `q` set to `query`, other parameters kept
    pub fn request_url(endpoint: &Url, query: &str) -> Url {
        let kept: Vec<(String, String)> = endpoint
            .query_pairs()
            .filter(|(key, _)| key != "q")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("q", query);
        url
    }

    fn request(&self, url: Url) -> HttpRequest {
        let request = HttpRequest::get(url).header("Accept", "application/vnd.github+json");
        match self.token {
            Some(ref token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn fetch_page(&self, url: Url) -> Result<SearchPage> {
        let response = self.transport.execute(self.request(url)).await?;

        if !response.is_success() {
            return Err(match response.status {
                403 | 429 => Error::RateLimited,
                status => Error::Status { status },
            });
        }

        response.json::<SearchPage>().map_err(|e| {
            debug!("unexpected payload from {}: {}", response.url, e);
            Error::WrongFormat
        })
    }

    /// Query every endpoint concurrently and merge the results.
    ///
    /// The first failing endpoint fails the whole search; results from the
    /// others are discarded.
    pub async fn try_search(&self, query: &str) -> Result<Vec<ResultItem>> {
        let pages = try_join_all(
            self.endpoints
                .iter()
                .map(|endpoint| self.fetch_page(Self::request_url(endpoint, query))),
        )
        .await?;

        let mut items = pages
            .into_iter()
            .flat_map(|page| page.items)
            .map(RawItem::into_result_item)
            .collect::<Result<Vec<_>>>()?;

        sort_by_display_text(&mut items);
        Ok(items)
    }
}

#[async_trait]
impl SearchProvider for GithubSearch {
    async fn search(&self, query: &str) -> SearchOutcome {
        match self.try_search(query).await {
            Ok(items) => {
                debug!("GitHub search {:?} returned {} items", query, items.len());
                SearchOutcome::found(items)
            }
            Err(e) => {
                warn!("GitHub search {:?} failed: {}", query, e);
                SearchOutcome::failed(e.to_string())
            }
        }
    }
}
