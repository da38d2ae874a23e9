//! Form component
//!
//! Popup with the login form or the new blog form, depending on the mode.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        ui::{BlogFields, FormState, LoginFields, UiMode},
        AppState,
    },
    presentation::widgets::{popup::centered_rect, text_input::text_input},
};

const FIELD_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 60;
const PASSWORD_MASK: char = '•';

#[derive(Debug, Clone, Default)]
pub struct FormComponent;

impl FormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        match state.ui.mode {
            UiMode::Login => Self::render_form(
                frame,
                area,
                "Log in to application",
                &state.ui.login_form,
                &LoginFields::LABELS,
                Some(LoginFields::PASSWORD),
                state.config.config.styles.style("highlight"),
            ),
            UiMode::NewBlog => Self::render_form(
                frame,
                area,
                "Create new",
                &state.ui.blog_form,
                &BlogFields::LABELS,
                None,
                state.config.config.styles.style("highlight"),
            ),
            _ => {}
        }
    }

    fn render_form(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        form: &FormState,
        labels: &[&'static str],
        masked: Option<usize>,
        focus_style: Style,
    ) {
        let height = FIELD_HEIGHT * labels.len() as u16 + 2;
        let popup = centered_rect(FORM_WIDTH, height, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{title}: Enter to submit, Esc to close"));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::vertical(vec![Constraint::Length(FIELD_HEIGHT); labels.len()])
            .split(inner);

        for (index, (label, input)) in labels.iter().zip(form.fields()).enumerate() {
            let focused = index == form.focus();
            let mut block = Block::default().borders(Borders::ALL).title(*label);
            if focused {
                block = block.border_style(focus_style);
            }
            let mask = (masked == Some(index)).then_some(PASSWORD_MASK);
            let textarea = text_input(input, block, focused, mask);
            if let Some(row) = rows.get(index) {
                frame.render_widget(&textarea, *row);
            }
        }
    }
}
