use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, MessageResponseDto},
        user::{ChangePasswordDto, LoginDto, RegisterDto, ResetPasswordDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, validation::ValidationError, Error},
        model::{app::AppState, session::user::SessionUserId, user::NewUser},
        service::credential::CredentialService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Returned by the reset endpoint whether or not the email belongs to an account
pub static RESET_RESPONSE_MESSAGE: &str =
    "If an account exists for that email, a temporary password has been sent.";

const MAX_USERNAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 255;

/// Register a new account
///
/// # Responses
/// - 201 (Created): Account created
/// - 400 (Bad Request): A field is missing, invalid, or the password is too weak
/// - 409 (Conflict): Username or email already in use
/// - 500 (Internal Server Error): Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration field", body = FieldErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let username = payload.username.trim().to_string();
    let email = payload.email.trim().to_string();

    if username.is_empty() {
        return Err(ValidationError::MissingField("username").into());
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::InvalidField {
            field: "username",
            reason: format!("must be at most {} characters", MAX_USERNAME_LENGTH),
        }
        .into());
    }
    if email.is_empty() {
        return Err(ValidationError::MissingField("email").into());
    }
    if !email.contains('@') || email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::InvalidField {
            field: "email",
            reason: "must be a valid email address".to_string(),
        }
        .into());
    }
    if payload.password != payload.confirm_password {
        return Err(ValidationError::PasswordMismatch.into());
    }

    let credential_service = CredentialService::new(&state.db);
    if credential_service.username_exists(&username).await?
        || credential_service.email_exists(&email).await?
    {
        return Err(AuthError::AccountExists.into());
    }

    let user = credential_service
        .create(NewUser {
            username,
            email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Log in with username and password
///
/// The session ID is replaced on success.
///
/// # Responses
/// - 200 (OK): Logged in
/// - 401 (Unauthorized): Unknown username or wrong password
/// - 500 (Internal Server Error): Session or database failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = CredentialService::new(&state.db)
        .authenticate(payload.username.trim(), &payload.password)
        .await?
    else {
        return Err(AuthError::InvalidCredentials.into());
    };

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok(Json(UserDto::from(user)))
}

/// Log out by discarding the session
///
/// # Responses
/// - 204 (No Content): Session discarded
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok(Json(UserDto::from(user)))
}

/// Change the logged in user's password
///
/// # Responses
/// - 204 (No Content): Password changed
/// - 400 (Bad Request): Confirmation mismatch or weak password
/// - 404 (Not Found): Not logged in
/// - 500 (Internal Server Error): Database or hashing failure
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid password", body = FieldErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if payload.password != payload.confirm_password {
        return Err(ValidationError::PasswordMismatch.into());
    }

    let updated = CredentialService::new(&state.db)
        .update_password(user.id, &payload.password)
        .await?;
    if !updated {
        return Err(AuthError::UserNotInDatabase(user.id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Request a temporary password by email
///
/// The response is identical whether or not the email belongs to an account. The
/// temporary password is delivered out of band and never returned here.
#[utoipa::path(
    post,
    path = "/api/auth/reset",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Reset processed", body = MessageResponseDto),
        (status = 400, description = "Email missing", body = FieldErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let email = payload.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email").into());
    }

    if let Some(temp_password) = CredentialService::new(&state.db)
        .issue_temp_password(email)
        .await?
    {
        state.reset_notifier.deliver(email, &temp_password);
    }

    Ok(Json(MessageResponseDto {
        message: RESET_RESPONSE_MESSAGE.to_string(),
    }))
}
