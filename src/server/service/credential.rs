//! Account credentials: registration, login checks, password changes and resets.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, Error},
    model::{db::UserModel, user::NewUser},
    util::password::{generate_temp_password, hash_password, is_strong_password, verify_password},
};

pub struct CredentialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CredentialService<'a> {
    /// Creates a new instance of [`CredentialService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username and password pair.
    ///
    /// An unknown username and a wrong password both yield `Ok(None)` so callers
    /// cannot tell them apart. A stored hash bcrypt cannot parse is logged and also
    /// treated as a failed login.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserModel>, Error> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            tracing::debug!("Login attempt for unknown username");
            return Ok(None);
        };

        match verify_password(password.to_string(), user.password_hash.clone()).await {
            Ok(true) => Ok(Some(user)),
            Ok(false) => {
                tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
                Ok(None)
            }
            Err(Error::BcryptError(err)) => {
                tracing::warn!(
                    user_id = %user.id,
                    "Stored password hash could not be verified: {}",
                    err
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The stored user
    /// - `Err(Error::ValidationError)` - Password fails the strength policy
    /// - `Err(Error::AuthError(AccountExists))` - Username or email already taken
    /// - `Err(Error::DbErr)` - Database failure
    pub async fn create(&self, new_user: NewUser) -> Result<UserModel, Error> {
        if !is_strong_password(&new_user.password) {
            return Err(ValidationError::WeakPassword.into());
        }

        let password_hash = hash_password(new_user.password).await?;

        let txn = self.db.begin().await?;
        let user = UserRepository::new(&txn)
            .create(new_user.username, new_user.email, password_hash)
            .await
            .map_err(map_unique_violation)?;
        txn.commit().await?;

        tracing::debug!(user_id = %user.id, "Registered new user");

        Ok(user)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, Error> {
        Ok(UserRepository::new(self.db)
            .exists_by_username(username)
            .await?)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, Error> {
        Ok(UserRepository::new(self.db).exists_by_email(email).await?)
    }

    /// Replaces a user's password after checking the strength policy.
    ///
    /// Returns `false` when the user does not exist.
    pub async fn update_password(&self, user_id: i32, new_password: &str) -> Result<bool, Error> {
        if !is_strong_password(new_password) {
            return Err(ValidationError::WeakPassword.into());
        }

        let password_hash = hash_password(new_password.to_string()).await?;

        let txn = self.db.begin().await?;
        let updated = UserRepository::new(&txn)
            .update_password_hash(user_id, password_hash)
            .await?;
        txn.commit().await?;

        Ok(updated.is_some())
    }

    /// Assigns a freshly generated temporary password to the account with `email`.
    ///
    /// Returns the plaintext temporary password, or `None` when no account uses
    /// that email. The plaintext is not stored anywhere.
    pub async fn issue_temp_password(&self, email: &str) -> Result<Option<String>, Error> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Ok(None);
        };

        let temp_password = generate_temp_password();
        let password_hash = hash_password(temp_password.clone()).await?;

        let txn = self.db.begin().await?;
        let updated = UserRepository::new(&txn)
            .update_password_hash(user.id, password_hash)
            .await?;
        txn.commit().await?;

        if updated.is_none() {
            return Ok(None);
        }

        tracing::debug!(user_id = %user.id, "Issued temporary password");

        Ok(Some(temp_password))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}

fn map_unique_violation(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::AccountExists.into(),
        _ => err.into(),
    }
}
