use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{blog::BlogMsg, session::SessionMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{ui::UiMode, AppState},
    },
    domain::Notification,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::notify(Notification::error(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    match state.ui.mode {
        UiMode::Browse => translate_browse_keys(key, state),
        UiMode::ConfirmDelete { .. } => translate_confirm_keys(key),
        UiMode::Login | UiMode::NewBlog | UiMode::Filter => translate_input_keys(key, state),
    }
}

/// y confirms, n or Esc cancels, anything else is ignored
fn translate_confirm_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Char('y' | 'Y') => vec![Msg::Ui(UiMsg::ConfirmDelete)],
        KeyCode::Char('n' | 'N') | KeyCode::Esc => vec![Msg::Ui(UiMsg::Cancel)],
        _ => vec![],
    }
}

/// Key bindings while a form or the filter has focus
fn translate_input_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let in_form = matches!(state.ui.mode, UiMode::Login | UiMode::NewBlog);

    match key.code {
        KeyCode::Esc => vec![Msg::Ui(UiMsg::Cancel)],
        KeyCode::Enter => vec![Msg::Ui(UiMsg::Submit)],
        KeyCode::Tab if in_form => vec![Msg::Ui(UiMsg::NextField)],
        KeyCode::BackTab if in_form => vec![Msg::Ui(UiMsg::PrevField)],
        // Everything else is edited by the text field
        _ => vec![Msg::Ui(UiMsg::ProcessInput(key))],
    }
}

/// Key bindings when browsing the list
fn translate_browse_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(*action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => return vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => return vec![Msg::System(SystemMsg::Suspend)],
        Action::Login if !state.is_logged_in() => return vec![Msg::Ui(UiMsg::ShowLogin)],
        _ => {}
    }

    // Everything else needs a session
    if !state.is_logged_in() {
        return vec![];
    }

    let selected_id = || state.selected_blog().map(|blog| blog.id.clone());

    match action {
        Action::ScrollUp => vec![Msg::Blog(BlogMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Blog(BlogMsg::ScrollDown)],
        Action::ScrollToTop => vec![Msg::Blog(BlogMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Blog(BlogMsg::ScrollToBottom)],
        Action::Like => selected_id()
            .map(|id| vec![Msg::Blog(BlogMsg::Like(id))])
            .unwrap_or_default(),
        Action::Delete => selected_id()
            .map(|id| vec![Msg::Ui(UiMsg::RequestDelete(id))])
            .unwrap_or_default(),
        Action::NewBlog => vec![Msg::Ui(UiMsg::ShowNewBlog)],
        Action::Logout => vec![Msg::Session(SessionMsg::Logout)],
        Action::Filter => vec![Msg::Ui(UiMsg::StartFilter)],
        Action::Refresh => vec![Msg::Blog(BlogMsg::Refresh)],
        Action::Login | Action::Quit | Action::Suspend => vec![],
    }
}
