//! Notification component

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::notification_line::NotificationLine};

#[derive(Debug, Clone, Default)]
pub struct NotificationComponent;

impl NotificationComponent {
    pub fn new() -> Self {
        Self
    }

    /// Renders the current notification, styled by its kind
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if let Some(notification) = state.notification() {
            let style = state
                .config
                .config
                .styles
                .style(&notification.style.to_string());
            frame.render_widget(NotificationLine::new(notification, style), area);
        }
    }
}
