//! Service layer.
//!
//! Services are stateless and built per request from a borrowed
//! `DatabaseConnection`. Every write runs inside a single transaction; the caller's
//! identity is always passed in explicitly.

pub mod credential;
pub mod directory;
pub mod favorite;
pub mod message;
