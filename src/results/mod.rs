//! Result types shared by the coordinator and the search adapters
//!
//! Defines the displayable item shape, the outcome of one search and the
//! ordering used to present merged results.

mod ordering;
mod types;

pub use ordering::{locale_cmp, sort_by_display_text};
pub use types::*;
