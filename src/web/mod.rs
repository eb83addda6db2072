//! Web server module
//!
//! Exposes the GitHub search adapter as a JSON endpoint for browser
//! front ends that run their own coordinator.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
