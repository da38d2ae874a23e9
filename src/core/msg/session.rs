use secrecy::SecretString;

use crate::domain::{ClientError, User};

/// Messages specific to SessionState
#[derive(Debug, Clone)]
pub enum SessionMsg {
    /// Read the stored session at startup
    Restore,
    /// Result of reading the stored session
    Restored(Option<User>),
    Login {
        username: String,
        password: SecretString,
    },
    LoggedIn {
        generation: u64,
        result: Result<User, ClientError>,
    },
    Logout,
    /// Delayed logout after the server reported an expired token
    Expire { generation: u64 },
}
