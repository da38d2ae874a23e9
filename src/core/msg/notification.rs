use serde::{Deserialize, Serialize};

use crate::domain::Notification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationMsg {
    Show(Notification),
    /// Fired by the expiry timer of notification `id`
    Clear { id: u64 },
}
