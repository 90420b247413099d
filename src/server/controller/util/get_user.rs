use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
    service::credential::CredentialService,
};

/// Resolves the logged in user from the session.
///
/// # Returns
/// - `Ok(UserModel)` - The user whose ID is stored in session
/// - `Err(AuthError::UserNotInSession)` - No user ID in session
/// - `Err(AuthError::UserNotInDatabase)` - User ID in session no longer exists (session is flushed)
/// - `Err(Error)` - Session or database failure
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = CredentialService::new(&state.db).get_user(user_id).await? else {
        session.flush().await?;

        tracing::debug!(
            "Session flushed for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}
