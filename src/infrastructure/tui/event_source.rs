use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the app runner reads terminal events from
pub enum EventSource {
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    /// Scripted events; `None` once exhausted
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => {
                // Let spawned requests finish between scripted events,
                // as they would between keystrokes
                tokio::task::yield_now().await;
                queue.pop_front()
            }
        }
    }

    pub fn is_scripted(&self) -> bool {
        matches!(self, EventSource::Test(_))
    }
}
