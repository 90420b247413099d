//! Server-side models.
//!
//! Application state, database model aliases, session wrappers and the domain types
//! passed between controllers and services.

pub mod animal;
pub mod app;
pub mod db;
pub mod favorite;
pub mod message;
pub mod session;
pub mod user;
