//! Search coordinator: input, debounce, settlement and selection

use super::debounce::Debouncer;
use super::keys::{Key, KeyResponse};
use super::state::{SearchState, Settled};
use super::SearchProvider;
use crate::results::{ResultItem, SearchOutcome};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Internal events produced by the timer and by finished searches
#[derive(Debug)]
pub enum Event {
    /// The debounce timer elapsed and the search was invoked
    Fired { generation: u64, query: String },
    /// The search invoked for `generation` produced its outcome
    Settled {
        generation: u64,
        query: String,
        outcome: SearchOutcome,
    },
}

/// Everything a rendering layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub search_value: String,
    pub is_loading: bool,
    pub is_no_results: bool,
    pub result_items: Vec<ResultItem>,
    pub error: Option<String>,
    /// `-1` when nothing is selected
    pub selected_result_index: isize,
}

/// Per-widget search coordinator.
///
/// Owns the input echo, the debounce timer and the derived UI state. The
/// search itself is delegated to a `SearchProvider`; its progress comes
/// back as `Event`s which the owner feeds into `handle_event` (or lets
/// `settled`/`drain_events` do it).
///
/// Every input change bumps a generation counter. Events tagged with an
/// older generation are dropped, so a search the user has typed past or
/// cleared can never overwrite newer state.
pub struct Autocomplete {
    provider: Arc<dyn SearchProvider>,
    debouncer: Debouncer,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    search_value: String,
    state: SearchState,
    selected: Option<usize>,
    generation: u64,
}

impl Autocomplete {
    /// Create a coordinator with the default debounce delay
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            provider,
            debouncer: Debouncer::new(Duration::from_millis(crate::DEFAULT_DEBOUNCE_MS)),
            events_tx,
            events_rx,
            search_value: String::new(),
            state: SearchState::Idle,
            selected: None,
            generation: 0,
        }
    }

    /// Create a coordinator configured from settings
    pub fn from_settings(
        provider: Arc<dyn SearchProvider>,
        settings: &crate::config::AutocompleteSettings,
    ) -> Self {
        Self::new(provider).with_debounce(settings.debounce())
    }

    /// Set the debounce delay
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Raw text currently in the input
    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_no_results(&self) -> bool {
        self.state.is_no_results()
    }

    pub fn result_items(&self) -> &[ResultItem] {
        self.state.result_items()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Selected row, `None` when nothing is selected
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selected row in the `-1`-means-none convention
    pub fn selected_result_index(&self) -> isize {
        self.selected.map_or(-1, |index| index as isize)
    }

    /// The selected item, if the cursor is on one
    pub fn selected_item(&self) -> Option<&ResultItem> {
        self.selected
            .and_then(|index| self.state.result_items().get(index))
    }

    /// Capture the current frame for a rendering layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            search_value: self.search_value.clone(),
            is_loading: self.is_loading(),
            is_no_results: self.is_no_results(),
            result_items: self.result_items().to_vec(),
            error: self.error().map(str::to_string),
            selected_result_index: self.selected_result_index(),
        }
    }

    /// The input text changed.
    ///
    /// Below the activation threshold the armed timer is canceled and the
    /// state resets to `Idle`. Otherwise the timer is (re)armed for `text`
    /// and the state turns to loading while keeping the current display.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.search_value.clone_from(&text);
        self.generation += 1;

        if text.chars().count() < crate::MIN_QUERY_LEN {
            if self.debouncer.cancel() {
                debug!("canceled pending search, input below threshold");
            }
            self.state = SearchState::Idle;
            self.selected = None;
            return;
        }

        self.state = std::mem::take(&mut self.state).into_pending();
        self.arm(text);
    }

    fn arm(&mut self, query: String) {
        let generation = self.generation;
        let provider = Arc::clone(&self.provider);
        let events = self.events_tx.clone();
        debug!(generation, "search armed for {:?}", query);

        self.debouncer.schedule(move || {
            let _ = events.send(Event::Fired {
                generation,
                query: query.clone(),
            });

            tokio::spawn(async move {
                let outcome = provider.search(&query).await;
                let _ = events.send(Event::Settled {
                    generation,
                    query,
                    outcome,
                });
            });
        });
    }

    /// Apply an event. Returns whether the state changed.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Fired { generation, query } => {
                if generation != self.generation {
                    return false;
                }
                debug!(generation, "search invoked for {:?}", query);
                self.state = std::mem::take(&mut self.state).into_loading();
                true
            }
            Event::Settled {
                generation,
                query,
                outcome,
            } => {
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "discarding stale settlement for {:?}",
                        query
                    );
                    return false;
                }
                self.on_search_settled(outcome);
                true
            }
        }
    }

    /// Apply a search outcome unconditionally.
    ///
    /// `handle_event` calls this for current settlements; it is public for
    /// rendering layers that run searches themselves.
    pub fn on_search_settled(&mut self, outcome: SearchOutcome) {
        self.selected = None;
        self.state = SearchState::Settled(Settled::from(outcome));
        debug!(
            state = self.state.name(),
            results = self.state.result_items().len(),
            "search settled"
        );
    }

    /// Apply every event that is already queued. Returns whether anything changed.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.handle_event(event);
        }
        changed
    }

    /// Process events until the current query has settled.
    ///
    /// Returns immediately when nothing is loading. A provider that never
    /// completes (or panics) keeps this waiting.
    pub async fn settled(&mut self) {
        while self.state.is_loading() {
            match self.events_rx.recv().await {
                Some(event) => {
                    self.handle_event(event);
                }
                None => return,
            }
        }
    }

    /// A key was pressed in the input.
    ///
    /// Only acts while results are displayed. Arrow keys call
    /// `prevent_default` and move the cursor without wrapping; Enter asks
    /// for navigation to the selected item's URL.
    pub fn on_key_press(&mut self, key: Key, prevent_default: impl FnOnce()) -> KeyResponse {
        let len = self.state.result_items().len();
        if len == 0 {
            return KeyResponse::Ignored;
        }

        match key {
            Key::ArrowDown => {
                prevent_default();
                self.selected = Some(match self.selected {
                    None => 0,
                    Some(index) => (index + 1).min(len - 1),
                });
                KeyResponse::Selected(self.selected)
            }
            Key::ArrowUp => {
                prevent_default();
                self.selected = match self.selected {
                    None | Some(0) => None,
                    Some(index) => Some(index - 1),
                };
                KeyResponse::Selected(self.selected)
            }
            Key::Enter => match self.selected_item().and_then(ResultItem::link) {
                Some(url) => KeyResponse::Navigate(url.to_string()),
                None => KeyResponse::Ignored,
            },
            Key::Other(_) => KeyResponse::Ignored,
        }
    }
}
