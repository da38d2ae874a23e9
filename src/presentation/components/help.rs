//! Key hint line
//!
//! Lists the keys usable in the current mode. Browse mode hints are
//! read from the configured keybindings.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{ui::UiMode, AppState},
    presentation::config::{keybindings::key_event_to_string, Action, KeyBindings},
};

#[derive(Debug, Clone, Default)]
pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let line = Self::hints(state).join("  ");
        frame.render_widget(
            Paragraph::new(line).style(state.config.config.styles.style("muted")),
            area,
        );
    }

    pub fn hints(state: &AppState) -> Vec<String> {
        let fixed = |hints: &[(&str, &str)]| -> Vec<String> {
            hints
                .iter()
                .map(|(key, label)| format!("{key} {label}"))
                .collect()
        };

        match state.ui.mode {
            UiMode::Browse => {
                let actions: &[(Action, &str)] = if state.is_logged_in() {
                    &[
                        (Action::NewBlog, "new"),
                        (Action::Like, "like"),
                        (Action::Delete, "delete"),
                        (Action::Filter, "filter"),
                        (Action::Refresh, "refresh"),
                        (Action::Logout, "logout"),
                        (Action::Quit, "quit"),
                    ]
                } else {
                    &[(Action::Login, "login"), (Action::Quit, "quit")]
                };
                let bindings = &state.config.config.keybindings;
                actions
                    .iter()
                    .filter_map(|(action, label)| {
                        Self::key_for(bindings, *action).map(|key| format!("{key} {label}"))
                    })
                    .collect()
            }
            UiMode::Login | UiMode::NewBlog => fixed(&[
                ("tab", "next field"),
                ("enter", "submit"),
                ("esc", "cancel"),
            ]),
            UiMode::Filter => fixed(&[("enter", "done"), ("esc", "clear")]),
            UiMode::ConfirmDelete { .. } => fixed(&[("y", "delete"), ("n", "cancel")]),
        }
    }

    /// Shortest key sequence bound to `action`
    fn key_for(bindings: &KeyBindings, action: Action) -> Option<String> {
        bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(keys, _)| keys.iter().map(key_event_to_string).collect::<String>())
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }
}
