use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoriteModel;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, animal_id: i32) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            animal_id: ActiveValue::Set(animal_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn find(&self, user_id: i32, animal_id: i32) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::AnimalId.eq(animal_id))
            .one(self.db)
            .await
    }

    /// A user's favorites, newest first
    pub async fn get_by_user_newest(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every favorite row for the pair
    pub async fn delete(&self, user_id: i32, animal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::AnimalId.eq(animal_id))
            .exec(self.db)
            .await
    }

    /// Deletes every favorite pointing at a listing, across all users
    pub async fn delete_by_animal(&self, animal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::AnimalId.eq(animal_id))
            .exec(self.db)
            .await
    }
}
