use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Terminal and process events before the translator has looked at them.
///
/// A key only gains meaning once the UI mode is known: `j` scrolls the list
/// while browsing but is text inside the login form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Shown as an error notification
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
