use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Res};

pub const USER_ID_KEY: &str = "user_id";
pub const USER_NAME_KEY: &str = "user_name";

/// The identity a session cookie resolves to. Written at register/login,
/// read by the session guard and the request logger. Never backed by a
/// database lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
}

/// Reads the signed-in user out of the session cookie, if any.
/// A missing or undecodable cookie reads as "not signed in".
pub fn get_session_user(session: &Session) -> Option<SessionUser> {
    let id = session.get::<i64>(USER_ID_KEY).ok().flatten()?;
    let name = session
        .get::<String>(USER_NAME_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    Some(SessionUser { id, name })
}

pub fn store_session_user(session: &Session, user: &SessionUser) -> Res<()> {
    session
        .insert(USER_ID_KEY, user.id)
        .map_err(|_| AppError::Internal("Failed to write session cookie".to_string()))?;
    session
        .insert(USER_NAME_KEY, &user.name)
        .map_err(|_| AppError::Internal("Failed to write session cookie".to_string()))?;
    Ok(())
}
