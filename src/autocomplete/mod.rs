//! Search-as-you-type coordination
//!
//! The coordinator turns keystrokes into debounced calls to a
//! `SearchProvider` and keeps the loading/result/no-result/error state and
//! the keyboard selection consistent while those calls race each other.
//! It is not responsible for fetching data; any provider will do.

mod coordinator;
mod debounce;
mod keys;
mod state;

pub use coordinator::{Autocomplete, Event, Snapshot};
pub use debounce::Debouncer;
pub use keys::{Key, KeyResponse};
pub use state::{SearchState, Settled};

use crate::results::SearchOutcome;
use async_trait::async_trait;
use std::future::Future;

/// Asynchronous search capability injected into the coordinator.
///
/// Implementations must not fail for expected problems: they resolve with
/// a `SearchOutcome` carrying `error` instead. A provider that panics is
/// out of contract and leaves the coordinator loading.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Produce results (or an error message) for `query`
    async fn search(&self, query: &str) -> SearchOutcome;
}

/// Adapts an async closure into a `SearchProvider`
pub struct SearchFn<F>(F);

impl<F, Fut> SearchFn<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = SearchOutcome> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> SearchProvider for SearchFn<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = SearchOutcome> + Send + 'static,
{
    async fn search(&self, query: &str) -> SearchOutcome {
        (self.0)(query.to_string()).await
    }
}
