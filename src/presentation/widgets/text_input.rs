use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::ui::TextAreaState;

/// Builds a one-line `TextArea` showing `input`.
///
/// The cursor is only drawn when the field has focus; `mask` hides the
/// content behind a character, for passwords.
pub fn text_input(
    input: &TextAreaState,
    block: Block<'static>,
    focused: bool,
    mask: Option<char>,
) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![input.content.clone()]);
    let col = u16::try_from(input.cursor).unwrap_or(u16::MAX);
    textarea.move_cursor(CursorMove::Jump(0, col));
    textarea.set_cursor_line_style(Style::default());
    if !focused {
        textarea.set_cursor_style(Style::default());
    }
    if let Some(mask) = mask {
        textarea.set_mask_char(mask);
    }
    textarea.set_block(block);
    textarea
}
