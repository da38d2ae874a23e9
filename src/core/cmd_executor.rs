use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{blog::BlogMsg, notification::NotificationMsg, session::SessionMsg, Msg},
    },
    infrastructure::{api::BlogApi, storage::SessionStore},
};

/// Executes commands produced by `update`.
///
/// API calls and timers run as spawned tokio tasks and report back by
/// sending a `Msg` on `msg_sender`. Storage and token changes happen inline.
#[derive(Clone)]
pub struct CmdExecutor {
    api: Arc<dyn BlogApi>,
    sessions: SessionStore,
    msg_sender: mpsc::UnboundedSender<Msg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
    /// Pending notification clear; replaced on every new notification
    notification_timer: Arc<Mutex<Option<CancellationToken>>>,
}

impl CmdExecutor {
    pub fn new(
        api: Arc<dyn BlogApi>,
        sessions: SessionStore,
        msg_sender: mpsc::UnboundedSender<Msg>,
    ) -> Self {
        Self {
            api,
            sessions,
            msg_sender,
            tui_sender: None,
            render_req_sender: None,
            notification_timer: Arc::new(Mutex::new(None)),
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            // Blog API
            Cmd::FetchBlogs { generation } => {
                let generation = *generation;
                self.spawn_request(move |api| async move {
                    let result = api.list().await;
                    Msg::Blog(BlogMsg::Fetched { generation, result })
                });
            }

            Cmd::CreateBlog { generation, blog } => {
                let (generation, blog) = (*generation, blog.clone());
                self.spawn_request(move |api| async move {
                    let result = api.create(&blog).await;
                    Msg::Blog(BlogMsg::Created { generation, result })
                });
            }

            Cmd::UpdateBlog { generation, blog } => {
                let (generation, blog) = (*generation, blog.clone());
                self.spawn_request(move |api| async move {
                    let result = api.update(&blog).await;
                    Msg::Blog(BlogMsg::Updated { generation, result })
                });
            }

            Cmd::DeleteBlog { generation, blog } => {
                let (generation, blog) = (*generation, blog.clone());
                self.spawn_request(move |api| async move {
                    let result = api.delete(&blog.id).await;
                    Msg::Blog(BlogMsg::Deleted {
                        generation,
                        blog,
                        result,
                    })
                });
            }

            // Session
            Cmd::Login {
                generation,
                username,
                password,
            } => {
                let (generation, username, password) =
                    (*generation, username.clone(), password.clone());
                self.spawn_request(move |api| async move {
                    let result = api.login(&username, &password).await;
                    Msg::Session(SessionMsg::LoggedIn { generation, result })
                });
            }

            Cmd::RestoreSession => {
                let user = self.sessions.load().unwrap_or_else(|e| {
                    log::error!("Failed to read stored session: {e:?}");
                    None
                });
                self.msg_sender.send(Msg::Session(SessionMsg::Restored(user)))?;
            }

            Cmd::PersistSession { user } => {
                if let Err(e) = self.sessions.save(user) {
                    log::error!("Failed to store session: {e:?}");
                }
            }

            Cmd::ClearSession => {
                if let Err(e) = self.sessions.clear() {
                    log::error!("Failed to remove stored session: {e:?}");
                }
            }

            Cmd::SetAuthToken { token } => {
                self.api.set_token(token.clone());
            }

            // Timers
            Cmd::ScheduleNotificationClear { id, delay_ms } => {
                self.schedule_notification_clear(*id, *delay_ms);
            }

            Cmd::ScheduleLogout {
                generation,
                delay_ms,
            } => {
                let generation = *generation;
                let delay = Duration::from_millis(*delay_ms);
                let sender = self.msg_sender.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if sender
                        .send(Msg::Session(SessionMsg::Expire { generation }))
                        .is_err()
                    {
                        log::debug!("logout dropped: runtime is gone");
                    }
                });
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            },

            Cmd::RequestRender => {
                if let Some(tx) = &self.render_req_sender {
                    let _ = tx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Runs an API request on the runtime and sends its result back
    fn spawn_request<F, Fut>(&self, request: F)
    where
        F: FnOnce(Arc<dyn BlogApi>) -> Fut,
        Fut: std::future::Future<Output = Msg> + Send + 'static,
    {
        let sender = self.msg_sender.clone();
        let response = request(Arc::clone(&self.api));
        tokio::spawn(async move {
            let msg = response.await;
            if sender.send(msg).is_err() {
                log::debug!("response dropped: runtime is gone");
            }
        });
    }

    fn schedule_notification_clear(&self, id: u64, delay_ms: u64) {
        let token = CancellationToken::new();
        let previous = self
            .notification_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.clone());
        if let Some(previous) = previous {
            previous.cancel();
        }

        let sender = self.msg_sender.clone();
        let delay = Duration::from_millis(delay_ms);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if sender
                        .send(Msg::Notification(NotificationMsg::Clear { id }))
                        .is_err()
                    {
                        log::debug!("notification clear dropped: runtime is gone");
                    }
                }
            }
        });
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_sender.is_closed(),
            has_tui_sender: self.tui_sender.is_some(),
            has_render_req_sender: self.render_req_sender.is_some(),
            has_token: self.api.has_token(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub has_tui_sender: bool,
    pub has_render_req_sender: bool,
    pub has_token: bool,
}
