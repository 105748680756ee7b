//! Error type shared by the server-side helpers.
//!
//! Server functions surface these to the client by converting to
//! `ServerFnError` at the boundary, so the variants' `Display` strings are
//! what users ultimately see.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("No couple connected")]
    NoCouple,
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("Invalid id: {0}")]
    BadId(#[from] uuid::Error),
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}
