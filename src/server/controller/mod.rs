//! HTTP controller endpoints for the PetPal JSON API.
//!
//! Controllers resolve the caller from the session, validate request bodies, call
//! the services and map their outcomes to HTTP responses.

pub mod animal;
pub mod auth;
pub mod export;
pub mod favorite;
pub mod message;
pub mod util;
