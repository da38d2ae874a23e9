//! Delete confirmation dialog

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::widgets::popup::centered_rect};

#[derive(Debug, Clone, Default)]
pub struct ConfirmComponent;

impl ConfirmComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(blog) = state.pending_delete() else {
            return;
        };

        let question = Self::question(&blog.title);
        let width = (question.chars().count() as u16).saturating_add(4).max(30);
        let popup = centered_rect(width, 3, area);

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(question)
                .style(state.config.config.styles.style("error"))
                .block(Block::default().borders(Borders::ALL).title("Confirm")),
            popup,
        );
    }

    pub fn question(title: &str) -> String {
        format!("Delete {title}? (y/n)")
    }
}
