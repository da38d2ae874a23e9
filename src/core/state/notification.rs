use crate::core::{cmd::Cmd, msg::notification::NotificationMsg};
use crate::domain::Notification;

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// The single notification slot.
///
/// Every shown notification gets a fresh id and schedules a clear for that
/// id. A clear only takes effect while its id is still the current one.
#[derive(Debug, Clone)]
pub struct NotificationState {
    current: Option<Notification>,
    current_id: u64,
    next_id: u64,
    timeout_ms: u64,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }
}

impl NotificationState {
    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            current: None,
            current_id: 0,
            next_id: 1,
            timeout_ms,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> u64 {
        self.current_id
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn update(&mut self, msg: NotificationMsg) -> Vec<Cmd> {
        match msg {
            NotificationMsg::Show(notification) => self.show(notification),
            NotificationMsg::Clear { id } => {
                self.clear(id);
                vec![]
            }
        }
    }

    /// Replaces the current notification and schedules its clear
    pub fn show(&mut self, notification: Notification) -> Vec<Cmd> {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.current_id = id;
        self.current = Some(notification);

        vec![Cmd::ScheduleNotificationClear {
            id,
            delay_ms: self.timeout_ms,
        }]
    }

    /// Clears the notification if `id` is still the current one
    pub fn clear(&mut self, id: u64) -> bool {
        if self.current.is_none() || id != self.current_id {
            return false;
        }
        self.current = None;
        true
    }
}
