use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { context: self }
    }
}

pub struct FavoriteFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        animal_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                animal_id: ActiveValue::Set(animal_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Count every favorite row, across all users.
    pub async fn count(&self) -> Result<usize, TestError> {
        Ok(entity::prelude::Favorite::find()
            .all(&self.context.db)
            .await?
            .len())
    }
}
