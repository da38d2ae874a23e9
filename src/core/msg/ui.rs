use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ShowLogin,
    ShowNewBlog,
    StartFilter,
    RequestDelete(String),
    ConfirmDelete,

    /// Esc in any overlay
    Cancel,
    /// Enter in any overlay
    Submit,
    NextField,
    PrevField,

    /// Key routed to the focused text field
    ProcessInput(KeyEvent),
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::ProcessInput(_))
    }
}
