use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn message(&self) -> MessageFixtures<'_> {
        MessageFixtures { context: self }
    }
}

pub struct MessageFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> MessageFixtures<'a> {
    /// Insert an unread message with a fixed body.
    pub async fn insert_message(
        &self,
        sender_id: i32,
        recipient_id: i32,
        animal_id: Option<i32>,
        subject: &str,
    ) -> Result<entity::message::Model, TestError> {
        self.insert_message_created_at(
            sender_id,
            recipient_id,
            animal_id,
            subject,
            Utc::now().naive_utc(),
        )
        .await
    }

    pub async fn insert_message_created_at(
        &self,
        sender_id: i32,
        recipient_id: i32,
        animal_id: Option<i32>,
        subject: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::message::Model, TestError> {
        Ok(
            entity::prelude::Message::insert(entity::message::ActiveModel {
                sender_id: ActiveValue::Set(sender_id),
                recipient_id: ActiveValue::Set(recipient_id),
                animal_id: ActiveValue::Set(animal_id),
                subject: ActiveValue::Set(subject.to_string()),
                content: ActiveValue::Set("Is this animal still available?".to_string()),
                created_at: ActiveValue::Set(created_at),
                is_read: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Count every message row.
    pub async fn count(&self) -> Result<usize, TestError> {
        Ok(entity::prelude::Message::find()
            .all(&self.context.db)
            .await?
            .len())
    }
}
