use chrono::NaiveDateTime;

use crate::{
    model::message::{MessageDto, ReplyDraftDto},
    server::model::db::{AnimalModel, MessageModel, UserModel},
};

/// Input for sending a message.
#[derive(Clone, Debug)]
pub struct NewMessage {
    pub sender_id: i32,
    pub recipient_id: i32,
    pub animal_id: Option<i32>,
    pub subject: String,
    pub content: String,
    /// Defaults to the current time when `None`
    pub sent_at: Option<NaiveDateTime>,
}

/// A message with both parties and the optional listing attached.
#[derive(Clone, Debug)]
pub struct MessageListing {
    pub message: MessageModel,
    pub sender: UserModel,
    pub recipient: UserModel,
    pub animal: Option<AnimalModel>,
}

/// Prefilled reply to an existing message.
#[derive(Clone, Debug)]
pub struct ReplyDraft {
    /// Sender of the original message
    pub recipient: UserModel,
    pub animal_id: Option<i32>,
    pub subject: String,
}

impl From<MessageListing> for MessageDto {
    fn from(entry: MessageListing) -> Self {
        let MessageListing {
            message,
            sender,
            recipient,
            animal,
        } = entry;

        Self {
            id: message.id,
            sender: sender.into(),
            recipient: recipient.into(),
            animal: animal.map(Into::into),
            subject: message.subject,
            content: message.content,
            created_at: message.created_at,
            is_read: message.is_read,
        }
    }
}

impl From<ReplyDraft> for ReplyDraftDto {
    fn from(draft: ReplyDraft) -> Self {
        Self {
            recipient: draft.recipient.into(),
            animal_id: draft.animal_id,
            subject: draft.subject,
        }
    }
}
