use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{db::MessageModel, message::NewMessage};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an unread message, stamped now unless `sent_at` is given
    pub async fn create(&self, message: NewMessage) -> Result<MessageModel, DbErr> {
        let message = entity::message::ActiveModel {
            sender_id: ActiveValue::Set(message.sender_id),
            recipient_id: ActiveValue::Set(message.recipient_id),
            animal_id: ActiveValue::Set(message.animal_id),
            subject: ActiveValue::Set(message.subject),
            content: ActiveValue::Set(message.content),
            created_at: ActiveValue::Set(message.sent_at.unwrap_or_else(|| Utc::now().naive_utc())),
            is_read: ActiveValue::Set(false),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    pub async fn find_by_id(&self, message_id: i32) -> Result<Option<MessageModel>, DbErr> {
        entity::prelude::Message::find_by_id(message_id)
            .one(self.db)
            .await
    }

    /// Messages received by a user, newest first
    pub async fn get_inbox(&self, user_id: i32) -> Result<Vec<MessageModel>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::RecipientId.eq(user_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await
    }

    /// Messages sent by a user, newest first
    pub async fn get_sent(&self, user_id: i32) -> Result<Vec<MessageModel>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::SenderId.eq(user_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, message_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Message::delete_by_id(message_id)
            .exec(self.db)
            .await
    }

    /// Deletes every message about a listing
    pub async fn delete_by_animal(&self, animal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Message::delete_many()
            .filter(entity::message::Column::AnimalId.eq(animal_id))
            .exec(self.db)
            .await
    }
}
