use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{animal::AnimalSummaryDto, user::UserSummaryDto};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub sender: UserSummaryDto,
    pub recipient: UserSummaryDto,
    pub animal: Option<AnimalSummaryDto>,
    pub subject: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub is_read: bool,
}

/// Body of a new message.
///
/// When `recipient_id` is omitted the owner of `animal_id` receives the message.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SendMessageDto {
    pub recipient_id: Option<i32>,
    pub animal_id: Option<i32>,
    pub subject: String,
    pub content: String,
}

/// Prefilled fields for replying to a message
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReplyDraftDto {
    pub recipient: UserSummaryDto,
    pub animal_id: Option<i32>,
    pub subject: String,
}
