//! Session data wrappers over tower-sessions.

pub mod user;
