//! Transport boundary between the search adapter and the network

use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

/// HTTP GET request issued by an adapter
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// URL to request, query string included
    pub url: Url,
    /// Request headers
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a GET request
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// HTTP response handed back to the adapter
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can execute an `HttpRequest`.
///
/// The production implementation is `HttpClient`; tests inject fakes here
/// instead of patching a global registry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response, whatever its status
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
