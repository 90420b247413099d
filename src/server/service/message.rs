//! Messages between users about listings.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{animal::AnimalRepository, message::MessageRepository, user::UserRepository},
    error::Error,
    model::{
        db::{AnimalModel, MessageModel},
        message::{MessageListing, NewMessage, ReplyDraft},
    },
};

const REPLY_PREFIX: &str = "Re: ";

/// Which side of a message a caller must be on to delete it.
#[derive(Clone, Copy)]
enum Mailbox {
    Inbox,
    Sent,
}

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    /// Creates a new instance of [`MessageService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Messages received by a user, newest first
    pub async fn load_inbox(&self, user_id: i32) -> Result<Vec<MessageListing>, Error> {
        let messages = MessageRepository::new(self.db).get_inbox(user_id).await?;

        self.attach_details(messages).await
    }

    /// Messages sent by a user, newest first
    pub async fn load_sent(&self, user_id: i32) -> Result<Vec<MessageListing>, Error> {
        let messages = MessageRepository::new(self.db).get_sent(user_id).await?;

        self.attach_details(messages).await
    }

    /// Stores a message; callers are responsible for validating its content.
    pub async fn send_message(&self, message: NewMessage) -> Result<MessageModel, Error> {
        let txn = self.db.begin().await?;
        let created = MessageRepository::new(&txn).create(message).await?;
        txn.commit().await?;

        tracing::debug!(
            message_id = %created.id,
            sender_id = %created.sender_id,
            recipient_id = %created.recipient_id,
            "Sent message"
        );

        Ok(created)
    }

    /// Deletes a message the user received. Returns `false` for anything else.
    pub async fn delete_from_inbox(&self, user_id: i32, message_id: i32) -> Result<bool, Error> {
        self.delete_from(Mailbox::Inbox, user_id, message_id).await
    }

    /// Deletes a message the user sent. Returns `false` for anything else.
    pub async fn delete_from_sent(&self, user_id: i32, message_id: i32) -> Result<bool, Error> {
        self.delete_from(Mailbox::Sent, user_id, message_id).await
    }

    pub async fn find_message(&self, message_id: i32) -> Result<Option<MessageModel>, Error> {
        Ok(MessageRepository::new(self.db)
            .find_by_id(message_id)
            .await?)
    }

    pub async fn find_animal(&self, animal_id: i32) -> Result<Option<AnimalModel>, Error> {
        Ok(AnimalRepository::new(self.db).find_by_id(animal_id).await?)
    }

    /// Prefills a reply addressed to the original sender.
    ///
    /// Only the sender or recipient of the original message gets a draft.
    pub async fn prepare_reply(
        &self,
        user_id: i32,
        message_id: i32,
    ) -> Result<Option<ReplyDraft>, Error> {
        let Some(original) = self.find_message(message_id).await? else {
            return Ok(None);
        };
        if original.sender_id != user_id && original.recipient_id != user_id {
            return Ok(None);
        }

        let Some(recipient) = UserRepository::new(self.db)
            .find_by_id(original.sender_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(ReplyDraft {
            recipient,
            animal_id: original.animal_id,
            subject: format!("{}{}", REPLY_PREFIX, original.subject),
        }))
    }

    async fn delete_from(
        &self,
        mailbox: Mailbox,
        user_id: i32,
        message_id: i32,
    ) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let message_repo = MessageRepository::new(&txn);

        let Some(message) = message_repo.find_by_id(message_id).await? else {
            return Ok(false);
        };

        let party_id = match mailbox {
            Mailbox::Inbox => message.recipient_id,
            Mailbox::Sent => message.sender_id,
        };
        if party_id != user_id {
            tracing::debug!(
                user_id = %user_id,
                message_id = %message_id,
                "Refused delete of message from another user's mailbox"
            );
            return Ok(false);
        }

        message_repo.delete(message_id).await?;
        txn.commit().await?;

        Ok(true)
    }

    /// Loads senders, recipients and listings for a page of messages in batch.
    async fn attach_details(
        &self,
        messages: Vec<MessageModel>,
    ) -> Result<Vec<MessageListing>, Error> {
        let mut user_ids: Vec<i32> = messages
            .iter()
            .flat_map(|m| [m.sender_id, m.recipient_id])
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let mut animal_ids: Vec<i32> = messages.iter().filter_map(|m| m.animal_id).collect();
        animal_ids.sort_unstable();
        animal_ids.dedup();

        let users: HashMap<_, _> = UserRepository::new(self.db)
            .find_many_by_ids(user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();
        let animals: HashMap<_, _> = AnimalRepository::new(self.db)
            .find_many_by_ids(animal_ids)
            .await?
            .into_iter()
            .map(|animal| (animal.id, animal))
            .collect();

        Ok(messages
            .into_iter()
            .filter_map(|message| {
                let sender = users.get(&message.sender_id).cloned();
                let recipient = users.get(&message.recipient_id).cloned();
                let animal = message
                    .animal_id
                    .and_then(|animal_id| animals.get(&animal_id).cloned());

                match (sender, recipient) {
                    (Some(sender), Some(recipient)) => Some(MessageListing {
                        message,
                        sender,
                        recipient,
                        animal,
                    }),
                    _ => {
                        tracing::warn!(
                            message_id = %message.id,
                            "Skipping message with missing sender or recipient"
                        );
                        None
                    }
                }
            })
            .collect())
    }
}
