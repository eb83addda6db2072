//! Coordinator state as a single tagged union

use crate::results::{ResultItem, SearchOutcome};

/// What a completed search left on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    HasResults(Vec<ResultItem>),
    NoResults,
    Errored(String),
}

impl Settled {
    /// Items to display, empty unless `HasResults`
    pub fn result_items(&self) -> &[ResultItem] {
        match self {
            Settled::HasResults(items) => items,
            _ => &[],
        }
    }

    /// Error message, if the search failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Settled::Errored(message) => Some(message),
            _ => None,
        }
    }
}

impl From<SearchOutcome> for Settled {
    fn from(outcome: SearchOutcome) -> Self {
        let SearchOutcome { results, error } = outcome;
        match error {
            Some(message) if !message.is_empty() => Settled::Errored(message),
            _ if results.is_empty() => Settled::NoResults,
            _ => Settled::HasResults(results),
        }
    }
}

/// Lifecycle of one query.
///
/// `Pending` (timer armed) and `Loading` (search invoked) keep the display
/// of the previous completed search in `previous` so the result box does
/// not flash while the next one is underway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Pending { previous: Option<Settled> },
    Loading { previous: Option<Settled> },
    Settled(Settled),
}

impl SearchState {
    /// The completed search currently on screen, if any
    pub fn displayed(&self) -> Option<&Settled> {
        match self {
            SearchState::Idle => None,
            SearchState::Pending { previous } | SearchState::Loading { previous } => {
                previous.as_ref()
            }
            SearchState::Settled(settled) => Some(settled),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            SearchState::Pending { .. } | SearchState::Loading { .. }
        )
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self.displayed(), Some(Settled::NoResults))
    }

    pub fn result_items(&self) -> &[ResultItem] {
        self.displayed().map(Settled::result_items).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&str> {
        self.displayed().and_then(Settled::error)
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SearchState::Idle => "idle",
            SearchState::Pending { .. } => "pending",
            SearchState::Loading { .. } => "loading",
            SearchState::Settled(Settled::HasResults(_)) => "has-results",
            SearchState::Settled(Settled::NoResults) => "no-results",
            SearchState::Settled(Settled::Errored(_)) => "errored",
        }
    }

    /// A qualifying keystroke armed (or re-armed) the timer
    pub(crate) fn into_pending(self) -> Self {
        let previous = match self {
            SearchState::Idle => None,
            SearchState::Pending { previous } | SearchState::Loading { previous } => previous,
            SearchState::Settled(settled) => Some(settled),
        };
        SearchState::Pending { previous }
    }

    /// The armed timer fired and the search was invoked
    pub(crate) fn into_loading(self) -> Self {
        match self {
            SearchState::Pending { previous } => SearchState::Loading { previous },
            other => other,
        }
    }
}
