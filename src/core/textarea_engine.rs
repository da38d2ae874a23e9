use crossterm::event::KeyEvent;

use crate::core::state::ui::TextAreaState;

/// Engine interface that applies a sequence of key events to a text field
/// snapshot and returns the resulting snapshot. Implementations must be
/// deterministic and free of side effects so they can run inside `update`.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }
}
