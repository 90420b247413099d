use crate::{model::user::UserDto, server::model::db::UserModel};

/// Registration input after the controller has checked the confirmation field.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Plaintext password, hashed before anything is written
    pub password: String,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
