//! Error types for the search adapter and its transport

use thiserror::Error;

/// Result type alias used by the adapter and transport layers
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can occur while fetching and parsing remote search results.
///
/// None of these cross into the coordinator: the adapter turns them into
/// a `SearchOutcome` carrying the rendered message.
#[derive(Error, Debug)]
pub enum Error {
    /// Request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Status { status: u16 },

    /// Endpoint refused the request because the API quota is exhausted
    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    /// Body did not match the expected payload shape
    #[error("Response in wrong format")]
    WrongFormat,

    /// Endpoint template is not a valid URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = Error::Status { status: 400 };
        assert_eq!(err.to_string(), "HTTP error: 400");
    }

    #[test]
    fn test_wrong_format_display() {
        assert_eq!(Error::WrongFormat.to_string(), "Response in wrong format");
    }

    #[test]
    fn test_invalid_url_from() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid endpoint URL"));
    }
}
