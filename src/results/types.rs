//! Result type definitions

use serde::{Deserialize, Serialize};

/// One searchable entity to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    /// Rendered label, also the sort key
    pub display_text: String,
    /// Optional avatar or icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Optional navigation target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ResultItem {
    /// Create a new item with only display text
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            image_url: None,
            url: None,
        }
    }

    /// Set the navigation target
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the avatar/icon URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Navigation target, if present and non-empty
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Result of one search invocation.
///
/// `error` is authoritative: when it carries a non-empty message the
/// outcome is a failure regardless of what `results` holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Items in display order
    #[serde(default)]
    pub results: Vec<ResultItem>,
    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchOutcome {
    /// Successful outcome with the given items
    pub fn found(results: Vec<ResultItem>) -> Self {
        Self {
            results,
            error: None,
        }
    }

    /// Failed outcome carrying a message and no items
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// The error message, treating an empty string as no error
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }

    /// Whether this outcome reports a failure
    pub fn is_failure(&self) -> bool {
        self.error_message().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_item_builder() {
        let item = ResultItem::new("rust-lang")
            .with_url("https://github.com/rust-lang")
            .with_image_url("https://avatars.githubusercontent.com/u/5430905");
        assert_eq!(item.display_text, "rust-lang");
        assert_eq!(item.link(), Some("https://github.com/rust-lang"));
        assert!(item.image_url.is_some());
    }

    #[test]
    fn test_empty_url_is_not_a_link() {
        let item = ResultItem::new("abc").with_url("");
        assert_eq!(item.link(), None);
    }

    #[test]
    fn test_result_item_serializes_camel_case() {
        let item = ResultItem::new("abc").with_url("https://github.com/abc");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"displayText":"abc","url":"https://github.com/abc"}"#
        );
    }

    #[test]
    fn test_empty_error_is_not_a_failure() {
        let outcome = SearchOutcome {
            results: vec![],
            error: Some(String::new()),
        };
        assert!(!outcome.is_failure());
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn test_failed_outcome() {
        let outcome = SearchOutcome::failed("TEST");
        assert!(outcome.is_failure());
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.error_message(), Some("TEST"));
    }

    #[test]
    fn test_outcome_omits_missing_error() {
        let json = serde_json::to_string(&SearchOutcome::found(vec![])).unwrap();
        assert_eq!(json, r#"{"results":[]}"#);
    }
}
