use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "petpal:user:id";

/// ID of the logged in user as stored in the session
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Stores the logged in user, replacing any previous one
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// The logged in user, or `None` for an anonymous session.
    ///
    /// A value under the key that isn't a user ID is a session error.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(user_id)| user_id))
    }
}
