use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    /// Stop the process (ctrl-z); the runner resumes it
    Suspend,
    Resume,
    Resize(u16, u16),
    /// Whether the blog list is still being fetched
    SetLoading(bool),
}
