use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::{Blog, NewBlog, User};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, storage I/O, timers)
///
/// Network commands carry the session generation they were issued in so
/// that their results can be dropped once the session has changed.
#[derive(Debug, Clone)]
pub enum Cmd {
    // Blog API
    FetchBlogs {
        generation: u64,
    },
    CreateBlog {
        generation: u64,
        blog: NewBlog,
    },
    UpdateBlog {
        generation: u64,
        blog: Blog,
    },
    DeleteBlog {
        generation: u64,
        blog: Blog,
    },

    // Session
    Login {
        generation: u64,
        username: String,
        password: SecretString,
    },
    RestoreSession,
    PersistSession {
        user: User,
    },
    ClearSession,
    SetAuthToken {
        token: Option<SecretString>,
    },

    // Timers
    ScheduleNotificationClear {
        id: u64,
        delay_ms: u64,
    },
    ScheduleLogout {
        generation: u64,
        delay_ms: u64,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via render_req_sender and drained by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchBlogs { .. }
            | Cmd::CreateBlog { .. }
            | Cmd::UpdateBlog { .. }
            | Cmd::DeleteBlog { .. }
            | Cmd::Login { .. }
            | Cmd::ScheduleNotificationClear { .. }
            | Cmd::ScheduleLogout { .. } => true,

            Cmd::RestoreSession
            | Cmd::PersistSession { .. }
            | Cmd::ClearSession
            | Cmd::SetAuthToken { .. }
            | Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Whether the command talks to the blog service
    pub fn is_network(&self) -> bool {
        match self {
            Cmd::FetchBlogs { .. }
            | Cmd::CreateBlog { .. }
            | Cmd::UpdateBlog { .. }
            | Cmd::DeleteBlog { .. }
            | Cmd::Login { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_network()),
            _ => false,
        }
    }

    /// Human-readable command name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::FetchBlogs { .. } => "FetchBlogs".to_string(),
            Cmd::CreateBlog { .. } => "CreateBlog".to_string(),
            Cmd::UpdateBlog { .. } => "UpdateBlog".to_string(),
            Cmd::DeleteBlog { .. } => "DeleteBlog".to_string(),
            Cmd::Login { .. } => "Login".to_string(),
            Cmd::RestoreSession => "RestoreSession".to_string(),
            Cmd::PersistSession { .. } => "PersistSession".to_string(),
            Cmd::ClearSession => "ClearSession".to_string(),
            Cmd::SetAuthToken { .. } => "SetAuthToken".to_string(),
            Cmd::ScheduleNotificationClear { .. } => "ScheduleNotificationClear".to_string(),
            Cmd::ScheduleLogout { .. } => "ScheduleLogout".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::None => "None".to_string(),
        }
    }
}
