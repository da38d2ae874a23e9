//! Header component
//!
//! Application title and the session line.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut spans = vec![
            Span::styled("blogs", styles.style("title")),
            Span::raw("  "),
            Span::raw(Self::session_line(state)),
        ];
        if state.system.is_loading {
            spans.push(Span::styled("  loading...", styles.style("muted")));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn session_line(state: &AppState) -> String {
        match state.current_user() {
            Some(user) => format!("{} logged in", user.display_name()),
            None => "not logged in".to_string(),
        }
    }
}
