use crate::domain::{Blog, ClientError, NewBlog};

/// Messages for the blog store.
///
/// Results coming back from the API carry the session generation their
/// request was issued in; see [`crate::core::state::session::SessionState`].
#[derive(Debug, Clone, PartialEq)]
pub enum BlogMsg {
    // User intents
    Refresh,
    Add(NewBlog),
    Like(String),
    SetFilter(String),

    // Navigation over the displayed list
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,

    // API results
    Fetched {
        generation: u64,
        result: Result<Vec<Blog>, ClientError>,
    },
    Created {
        generation: u64,
        result: Result<Blog, ClientError>,
    },
    Updated {
        generation: u64,
        result: Result<Blog, ClientError>,
    },
    Deleted {
        generation: u64,
        blog: Blog,
        result: Result<(), ClientError>,
    },
}

impl BlogMsg {
    /// Messages produced by the API rather than by the user
    pub fn is_response(&self) -> bool {
        matches!(
            self,
            BlogMsg::Fetched { .. }
                | BlogMsg::Created { .. }
                | BlogMsg::Updated { .. }
                | BlogMsg::Deleted { .. }
        )
    }
}
