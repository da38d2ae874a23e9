//! Blog client state machine
//!
//! Terminal input becomes [`raw_msg::RawMsg`], the [`translator`] reads it
//! against the current UI mode, [`update`] folds the resulting messages into
//! [`state::AppState`], and the [`cmd_executor`] talks to the blog service,
//! the session store and the timers.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod translator;
pub mod update;
