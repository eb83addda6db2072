//! Terminal application state and key handling

use crate::autocomplete::{Autocomplete, Key, KeyResponse};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Application state
pub struct App {
    /// Search coordinator driving the widget
    pub autocomplete: Autocomplete,
    /// Hint shown in an empty input
    pub placeholder: String,
    /// Last navigation outcome, shown in place of the controls
    pub status: Option<String>,
    /// Should quit?
    pub should_quit: bool,
}

impl App {
    pub fn new(autocomplete: Autocomplete, placeholder: impl Into<String>) -> Self {
        Self {
            autocomplete,
            placeholder: placeholder.into(),
            status: None,
            should_quit: false,
        }
    }

    /// Handle a key press. Returns a URL when the user asked to open one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.set_input(String::new()),
            (KeyCode::Backspace, _) => {
                let mut text = self.autocomplete.search_value().to_string();
                if text.pop().is_some() {
                    self.set_input(text);
                }
            }
            (KeyCode::Up, _) => return self.forward(Key::ArrowUp),
            (KeyCode::Down, _) => return self.forward(Key::ArrowDown),
            (KeyCode::Enter, _) => return self.forward(Key::Enter),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                let mut text = self.autocomplete.search_value().to_string();
                text.push(c);
                self.set_input(text);
            }
            _ => {}
        }
        None
    }

    /// Open `url` in the system browser and report the outcome
    pub fn open(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => {
                info!("Opened {}", url);
                self.status = Some(format!("Opened {}", url));
            }
            Err(e) => {
                warn!("Could not open {}: {}", url, e);
                self.status = Some(format!("Could not open {}: {}", url, e));
            }
        }
    }

    fn set_input(&mut self, text: String) {
        self.status = None;
        self.autocomplete.on_input_change(text);
    }

    fn forward(&mut self, key: Key) -> Option<String> {
        match self.autocomplete.on_key_press(key, || {}) {
            KeyResponse::Navigate(url) => Some(url),
            KeyResponse::Selected(_) | KeyResponse::Ignored => None,
        }
    }
}
