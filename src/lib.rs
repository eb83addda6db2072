//! gh-autocomplete: search-as-you-type over GitHub users and repositories
//!
//! The `autocomplete` coordinator debounces keystrokes, drives an injected
//! `SearchProvider` and exposes loading/result/error state plus keyboard
//! selection. `engines::GithubSearch` is the provider that queries the
//! GitHub search API. The terminal UI and the HTTP endpoint are thin
//! surfaces over those two.

pub mod autocomplete;
pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod results;
pub mod tui;
pub mod web;

pub use autocomplete::{Autocomplete, SearchProvider};
pub use config::Settings;
pub use engines::GithubSearch;
pub use error::{Error, Result};
pub use results::{ResultItem, SearchOutcome};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default quiet period before a search fires, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Shortest input (in characters) that triggers a search
pub const MIN_QUERY_LEN: usize = 3;
