//! Data repositories.
//!
//! Each repository wraps one table and accepts any `ConnectionTrait`, so services can
//! run the same calls against a `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod animal;
pub mod category;
pub mod favorite;
pub mod message;
pub mod user;
