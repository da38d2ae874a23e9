use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    #[default]
    Info,
    Success,
    Error,
}

/// A transient status message shown after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
}

impl Notification {
    pub fn new(message: impl Into<String>, style: NotificationStyle) -> Self {
        // Notifications are rendered on a single line
        let message = message.into().replace('\n', " ");
        Self { message, style }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationStyle::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationStyle::Error)
    }
}
