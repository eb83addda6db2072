//! HTTP networking module
//!
//! Provides the transport boundary the search adapters talk through and
//! its reqwest implementation.

mod client;
mod transport;

pub use client::HttpClient;
pub use transport::{HttpRequest, HttpResponse, Transport};
