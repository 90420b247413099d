//! Request and response bodies of the JSON API.

pub mod animal;
pub mod api;
pub mod favorite;
pub mod message;
pub mod user;
