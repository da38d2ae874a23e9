//! Filter bar component
//!
//! Shows the title filter and its status. While the filter is being
//! edited the query is drawn as a text field with a cursor.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{ui::UiMode, AppState},
    presentation::widgets::text_input::text_input,
};

#[derive(Debug, Clone, Default)]
pub struct FilterBarComponent;

impl FilterBarComponent {
    const PROMPT: &'static str = "filter: ";

    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.is_logged_in() {
            return;
        }

        let styles = &state.config.config.styles;
        let status = state.blogs.filter_status().label();
        let [prompt_area, input_area, status_area] = Layout::horizontal([
            Constraint::Length(Self::PROMPT.len() as u16),
            Constraint::Min(0),
            Constraint::Length(status.len() as u16),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Self::PROMPT).style(styles.style("muted")),
            prompt_area,
        );

        if state.ui.mode == UiMode::Filter {
            let input = text_input(&state.ui.filter_input, Block::default(), true, None);
            frame.render_widget(&input, input_area);
        } else {
            frame.render_widget(Paragraph::new(state.blogs.query()), input_area);
        }

        frame.render_widget(
            Paragraph::new(status).style(styles.style("info")),
            status_area,
        );
    }
}
