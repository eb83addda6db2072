//! Keyboard input understood by the coordinator

/// A key press forwarded by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Other(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// Nothing to act on
    Ignored,
    /// Selection cursor moved; `None` means no selection
    Selected(Option<usize>),
    /// Open this URL in a new browsing context
    Navigate(String),
}
