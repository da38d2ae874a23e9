use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::{
        api::BlogApi, storage::SessionStore, tui::textarea_engine::TuiTextAreaEngine,
    },
};

/// Owns the application state and drives the update loop.
///
/// Raw input is translated into messages, messages are folded into the
/// state by `update`, and the resulting commands are handed to the
/// `CmdExecutor`, whose results come back through the message channel.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
    processed: usize,
}

impl Runtime {
    /// Create a new Runtime without a command executor.
    /// Commands accumulate in the queue until read with `pending_commands`.
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
            processed: 0,
        }
    }

    /// Create a new Runtime whose commands run against `api` and `sessions`
    pub fn new_with_executor(
        initial_state: AppState,
        api: Arc<dyn BlogApi>,
        sessions: SessionStore,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor(api, sessions);
        runtime
    }

    pub fn set_executor(&mut self, api: Arc<dyn BlogApi>, sessions: SessionStore) {
        self.cmd_executor = Some(CmdExecutor::new(api, sessions, self.msg_tx.clone()));
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_tui_sender(tui_sender);
                Ok(())
            }
            None => Err("No executor available. Use set_executor() first.".to_string()),
        }
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::UnboundedSender<()>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_render_request_sender(render_sender);
                Ok(())
            }
            None => Err("No executor available. Use set_executor() first.".to_string()),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        if self.cmd_executor.is_none() {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        }

        let commands = self.pending_commands();
        match &self.cmd_executor {
            Some(executor) if !commands.is_empty() => executor
                .execute_commands(&commands)
                .map_err(|e| format!("Command execution failed: {e}")),
            _ => Ok(vec![]),
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;
        self.processed += 1;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw input is translated one message at a time: a key that
        // switches mode changes how the next key is read
        while let Some(raw_msg) = self
            .raw_msg_queue
            .pop_front()
            .or_else(|| self.raw_msg_rx.try_recv().ok())
        {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Number of messages processed so far
    pub fn processed_count(&self) -> usize {
        self.processed
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            blogs_count: self.state.blogs.len(),
            visible_count: self.state.blogs.visible_len(),
            is_logged_in: self.state.is_logged_in(),
            session_generation: self.state.session.generation(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub blogs_count: usize,
    pub visible_count: usize,
    pub is_logged_in: bool,
    pub session_generation: u64,
    pub has_executor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::{blog::BlogMsg, session::SessionMsg, system::SystemMsg, ui::UiMsg};
    use crate::domain::{Blog, User};
    use crate::infrastructure::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use secrecy::SecretString;

    fn user() -> User {
        User {
            id: "u1".into(),
            username: "root".into(),
            name: String::new(),
            token: SecretString::from("t"),
        }
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = Runtime::new(AppState::default());
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.blogs_count, 0);
        assert!(!stats.has_executor);
    }

    #[test]
    fn test_send_message() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.send_msg(Msg::System(SystemMsg::Quit));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();

        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
        assert_eq!(runtime.processed_count(), 1);
    }

    #[test]
    fn test_commands_are_queued_without_executor() {
        let mut runtime = Runtime::new(AppState::default());

        runtime.send_msg(Msg::Blog(BlogMsg::Refresh));
        runtime.process_all_messages();

        assert_eq!(runtime.get_stats().queued_commands, 1);
        assert!(runtime.execute_pending_commands().is_err());
        let pending = runtime.pending_commands();
        assert!(matches!(pending.as_slice(), [Cmd::FetchBlogs { generation: 0 }]));
    }

    #[test]
    fn test_raw_key_goes_through_translator() -> color_eyre::Result<()> {
        let state = AppState::new_with_config(Config::defaults()?);
        let mut runtime = Runtime::new(state);
        runtime.send_msg(Msg::Session(SessionMsg::Restored(Some(user()))));
        runtime.send_msg(Msg::Blog(BlogMsg::Fetched {
            generation: 1,
            result: Ok(vec![Blog {
                id: "b1".into(),
                ..Default::default()
            }]),
        }));
        runtime.process_all_messages();

        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('/'),
            KeyModifiers::NONE,
        )));
        runtime.process_all_messages();

        assert!(runtime.state().ui.is_editing());
        Ok(())
    }

    #[test]
    fn test_keys_after_mode_switch_are_read_as_input() -> color_eyre::Result<()> {
        let state = AppState::new_with_config(Config::defaults()?);
        let mut runtime = Runtime::new(state);
        runtime.send_msg(Msg::Session(SessionMsg::Restored(Some(user()))));
        runtime.process_all_messages();

        // '/' starts the filter, so 'g' is typed rather than "scroll to top"
        for c in "/go".chars() {
            runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )));
        }
        runtime.process_all_messages();

        assert_eq!(runtime.state().blogs.query(), "go");
        Ok(())
    }

    #[test]
    fn test_filter_typing_uses_textarea_engine() {
        let mut runtime = Runtime::new(AppState::default());
        runtime.send_msg(Msg::Session(SessionMsg::Restored(Some(user()))));
        runtime.send_msg(Msg::Ui(UiMsg::StartFilter));
        for c in "go".chars() {
            runtime.send_msg(Msg::Ui(UiMsg::ProcessInput(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            ))));
        }

        runtime.process_all_messages();

        assert_eq!(runtime.state().blogs.query(), "go");
    }

    #[test]
    fn test_external_sender_feeds_update() {
        let mut runtime = Runtime::new(AppState::default());
        let sender = runtime.get_sender();

        sender
            .send(Msg::System(SystemMsg::SetLoading(false)))
            .unwrap_or_else(|e| panic!("send failed: {e}"));
        runtime.process_all_messages();

        assert!(!runtime.state().system.is_loading);
    }
}
