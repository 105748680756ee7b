//! Session access for server functions.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::ApiError;

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Read the logged-in user id from the session, if any.
pub async fn current_user_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
    let stored: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    match stored {
        Some(id) => Ok(Some(Uuid::parse_str(&id)?)),
        None => Ok(None),
    }
}

/// Read the logged-in user id or fail with [`ApiError::NotAuthenticated`].
pub async fn require_user_id(session: &Session) -> Result<Uuid, ApiError> {
    current_user_id(session)
        .await?
        .ok_or(ApiError::NotAuthenticated)
}
