//! Utilities shared by services and controllers.

pub mod export;
pub mod image;
pub mod notify;
pub mod password;
