pub mod blog;
pub mod notification;
pub mod session;
pub mod system;
pub mod ui;

use blog::BlogMsg;
use notification::NotificationMsg;
use session::SessionMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Blog list operations and API results
    Blog(BlogMsg),

    // Login, logout and session restore
    Session(SessionMsg),

    // Transient notifications
    Notification(NotificationMsg),

    // UI mode and form input
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Ui(ui_msg) => ui_msg.is_frequent(),
            _ => false,
        }
    }

    /// Shorthand used by the update coordinator when it re-dispatches
    pub fn notify(notification: crate::domain::Notification) -> Self {
        Msg::Notification(NotificationMsg::Show(notification))
    }
}
