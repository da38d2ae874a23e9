use thiserror::Error;

/// Authentication failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("wrong username or password")]
    InvalidCredentials,
    #[error("token expired")]
    TokenExpired,
    #[error("{0}")]
    Unauthorized(String),
}

/// Everything that can go wrong while talking to the blog service.
///
/// None of these are fatal: the update loop turns each one into a
/// notification and keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally, nothing was sent
    #[error("{0}")]
    Validation(String),
    /// The server refused the payload; the message is shown verbatim
    #[error("{0}")]
    ServerValidation(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The record no longer exists on the server
    #[error("{0}")]
    StaleRecord(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
}

impl ClientError {
    /// Classifies an error response from the API.
    ///
    /// The service reports most failures only through the `error` string
    /// of its payload, so the message is inspected before the status code.
    pub fn from_response(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();

        if lowered.contains("token expired") {
            AuthError::TokenExpired.into()
        } else if lowered.contains("validation failed") {
            Self::ServerValidation(message)
        } else if status == 404 || lowered.contains("already deleted") {
            Self::StaleRecord(message)
        } else if status == 401 {
            AuthError::Unauthorized(message).into()
        } else {
            Self::Server { status, message }
        }
    }

    pub fn is_token_expired(&self) -> bool {
        matches!(self, Self::Auth(AuthError::TokenExpired))
    }

    pub fn is_stale_record(&self) -> bool {
        matches!(self, Self::StaleRecord(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(401, "token expired", ClientError::Auth(AuthError::TokenExpired))]
    #[case(400, "jwt: Token expired at 12:00", ClientError::Auth(AuthError::TokenExpired))]
    #[case(
        400,
        "Blog validation failed: title: Path `title` is required.",
        ClientError::ServerValidation("Blog validation failed: title: Path `title` is required.".into())
    )]
    #[case(404, "blog not found", ClientError::StaleRecord("blog not found".into()))]
    #[case(400, "blog already deleted", ClientError::StaleRecord("blog already deleted".into()))]
    #[case(
        401,
        "token missing or invalid",
        ClientError::Auth(AuthError::Unauthorized("token missing or invalid".into()))
    )]
    #[case(500, "boom", ClientError::Server { status: 500, message: "boom".into() })]
    fn test_from_response(#[case] status: u16, #[case] message: &str, #[case] expected: ClientError) {
        assert_eq!(ClientError::from_response(status, message), expected);
    }

    #[test]
    fn test_display_is_verbatim_for_server_messages() {
        let err = ClientError::from_response(400, "Blog validation failed: url missing");
        assert_eq!(err.to_string(), "Blog validation failed: url missing");

        let err = ClientError::Server {
            status: 500,
            message: "internal".into(),
        };
        assert_eq!(err.to_string(), "internal");
    }

    #[test]
    fn test_predicates() {
        assert!(ClientError::from(AuthError::TokenExpired).is_token_expired());
        assert!(!ClientError::Validation("x".into()).is_token_expired());
        assert!(ClientError::StaleRecord("gone".into()).is_stale_record());
    }
}
