//! Search adapters
//!
//! Concrete `SearchProvider`s that query remote services and normalize
//! their payloads into `ResultItem`s.

pub mod github;

pub use github::GithubSearch;
