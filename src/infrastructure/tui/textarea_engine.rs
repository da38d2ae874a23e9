use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::ui::TextAreaState;
use crate::core::textarea_engine::TextAreaEngine;

/// Production engine based on tui-textarea. It builds a temporary TextArea
/// from the snapshot, applies the keys, then extracts the new snapshot.
///
/// Fields are single-line, so line breaks produced by the widget are folded
/// back into the first line.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![snapshot.content.clone()]);
        let column = u16::try_from(snapshot.cursor).unwrap_or(u16::MAX);
        textarea.move_cursor(CursorMove::Jump(0, column));
        textarea
    }

    fn extract(textarea: &TextArea<'_>) -> TextAreaState {
        let content = textarea.lines().concat();
        let (row, column) = textarea.cursor();
        let cursor = if row == 0 {
            column
        } else {
            textarea.lines()[..row]
                .iter()
                .map(|line| line.chars().count())
                .sum::<usize>()
                + column
        };
        TextAreaState { content, cursor }
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::restore(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::extract(&textarea)
    }
}
