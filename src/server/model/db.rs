//! Database model type aliases.

/// A registered account.
pub type UserModel = entity::user::Model;

/// An animal category such as "Dogs".
pub type CategoryModel = entity::category::Model;

/// An animal listed for adoption, owned by a user.
pub type AnimalModel = entity::animal::Model;

/// A user's bookmark on a listing.
pub type FavoriteModel = entity::favorite::Model;

/// A message between two users, optionally about a listing.
pub type MessageModel = entity::message::Model;
