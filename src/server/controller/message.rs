use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        message::{MessageDto, ReplyDraftDto, SendMessageDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{validation::ValidationError, Error},
        model::{app::AppState, message::NewMessage},
        service::{credential::CredentialService, message::MessageService},
    },
};

pub static MESSAGE_TAG: &str = "message";

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorDto {
            error: "You cannot delete this message".to_string(),
        }),
    )
        .into_response()
}

/// List messages received by the logged in user, newest first
#[utoipa::path(
    get,
    path = "/api/messages/inbox",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Received messages", body = Vec<MessageDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inbox(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let messages = MessageService::new(&state.db).load_inbox(user.id).await?;

    Ok(Json(
        messages.into_iter().map(MessageDto::from).collect::<Vec<_>>(),
    ))
}

/// List messages sent by the logged in user, newest first
#[utoipa::path(
    get,
    path = "/api/messages/sent",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Sent messages", body = Vec<MessageDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sent(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let messages = MessageService::new(&state.db).load_sent(user.id).await?;

    Ok(Json(
        messages.into_iter().map(MessageDto::from).collect::<Vec<_>>(),
    ))
}

/// Send a message
///
/// Without `recipient_id`, the message goes to the owner of `animal_id`.
///
/// # Responses
/// - 201 (Created): Message sent
/// - 400 (Bad Request): Blank subject or content, no resolvable recipient, or unknown listing
/// - 404 (Not Found): Not logged in
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Invalid message", body = FieldErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let message_service = MessageService::new(&state.db);

    let subject = payload.subject.trim().to_string();
    let content = payload.content.trim().to_string();
    if subject.is_empty() {
        return Err(ValidationError::MissingField("subject").into());
    }
    if content.is_empty() {
        return Err(ValidationError::MissingField("content").into());
    }

    let animal = match payload.animal_id {
        Some(animal_id) => match message_service.find_animal(animal_id).await? {
            Some(animal) => Some(animal),
            None => {
                return Err(ValidationError::InvalidField {
                    field: "animal_id",
                    reason: "animal does not exist".to_string(),
                }
                .into())
            }
        },
        None => None,
    };

    let recipient_id = match (payload.recipient_id, animal.as_ref()) {
        (Some(recipient_id), _) => recipient_id,
        (None, Some(animal)) => animal.owner_id,
        (None, None) => return Err(ValidationError::MissingField("recipient_id").into()),
    };

    let Some(recipient) = CredentialService::new(&state.db)
        .get_user(recipient_id)
        .await?
    else {
        return Err(ValidationError::InvalidField {
            field: "recipient_id",
            reason: "recipient does not exist".to_string(),
        }
        .into());
    };

    let message = message_service
        .send_message(NewMessage {
            sender_id: user.id,
            recipient_id: recipient.id,
            animal_id: animal.as_ref().map(|animal| animal.id),
            subject,
            content,
            sent_at: None,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            id: message.id,
            sender: user.into(),
            recipient: recipient.into(),
            animal: animal.map(Into::into),
            subject: message.subject,
            content: message.content,
            created_at: message.created_at,
            is_read: message.is_read,
        }),
    ))
}

/// Prefill a reply to a message the logged in user sent or received
#[utoipa::path(
    get,
    path = "/api/messages/{message_id}/reply",
    tag = MESSAGE_TAG,
    params(("message_id" = i32, Path, description = "ID of the message being replied to")),
    responses(
        (status = 200, description = "Reply draft", body = ReplyDraftDto),
        (status = 404, description = "User or message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn prepare_reply(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let Some(draft) = MessageService::new(&state.db)
        .prepare_reply(user.id, message_id)
        .await?
    else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Message not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok(Json(ReplyDraftDto::from(draft)).into_response())
}

/// Delete a message from the logged in user's inbox
#[utoipa::path(
    delete,
    path = "/api/messages/inbox/{message_id}",
    tag = MESSAGE_TAG,
    params(("message_id" = i32, Path, description = "ID of the message")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 403, description = "Message cannot be deleted by this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inbox_message(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if !MessageService::new(&state.db)
        .delete_from_inbox(user.id, message_id)
        .await?
    {
        return Ok(forbidden());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Delete a message from the logged in user's sent messages
#[utoipa::path(
    delete,
    path = "/api/messages/sent/{message_id}",
    tag = MESSAGE_TAG,
    params(("message_id" = i32, Path, description = "ID of the message")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 403, description = "Message cannot be deleted by this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sent_message(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if !MessageService::new(&state.db)
        .delete_from_sent(user.id, message_id)
        .await?
    {
        return Ok(forbidden());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
