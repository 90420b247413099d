use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user with an already hashed password
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Case-sensitive exact match on username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_many_by_ids(&self, user_ids: Vec<i32>) -> Result<Vec<UserModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Overwrites a user's password hash
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update_password_hash(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = user.into();
        user.password_hash = ActiveValue::Set(password_hash);

        Ok(Some(user.update(self.db).await?))
    }
}
