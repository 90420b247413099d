use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_EMAIL_DOMAIN, TEST_PASSWORD},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`] and whose email is
    /// `<username>@example.com`.
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user_with_password(username, TEST_PASSWORD).await
    }

    /// Insert a user with a specific plaintext password.
    pub async fn insert_user_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST)?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            email: ActiveValue::Set(format!("{}@{}", username, TEST_EMAIL_DOMAIN)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn find_user(&self, user_id: i32) -> Result<Option<entity::user::Model>, TestError> {
        Ok(entity::prelude::User::find_by_id(user_id)
            .one(&self.context.db)
            .await?)
    }
}
