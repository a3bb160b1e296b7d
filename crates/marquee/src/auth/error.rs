//! Authentication errors.

use thiserror::Error;

/// Errors produced by session validation and token handling.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token has expired")]
    TokenExpired,

    #[error("unknown session")]
    UnknownSession,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("invalid registration: {0}")]
    InvalidRegistration(String),

    #[error("insufficient permissions: {0}")]
    InsufficientPermissions(String),

    #[error("authentication error: {0}")]
    Internal(String),
}
