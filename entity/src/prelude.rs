pub use super::animal::Entity as Animal;
pub use super::category::Entity as Category;
pub use super::favorite::Entity as Favorite;
pub use super::message::Entity as Message;
pub use super::user::Entity as User;
