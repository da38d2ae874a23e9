pub mod blogs;
pub mod notification;
pub mod session;
pub mod system;
pub mod ui;

use crate::domain::{Blog, Notification, User};
use crate::infrastructure::config::Config;

use blogs::BlogState;
use notification::NotificationState;
use session::SessionState;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub blogs: BlogState,
    pub session: SessionState,
    pub notification: NotificationState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            notification: NotificationState::with_timeout(config.notification.timeout_ms),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn visible_blogs(&self) -> Vec<&Blog> {
        self.blogs.visible()
    }

    pub fn selected_blog(&self) -> Option<&Blog> {
        self.blogs.selected()
    }

    /// Whether the session user may delete `blog`
    pub fn can_delete(&self, blog: &Blog) -> bool {
        self.current_user().is_some_and(|user| blog.is_owned_by(user))
    }

    /// Blog awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<&Blog> {
        self.ui.pending_delete().and_then(|id| self.blogs.find(id))
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }
}
