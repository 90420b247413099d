//! Error types for the PetPal server.
//!
//! Domain errors live in their own submodules and are aggregated into [`Error`] via
//! `#[from]`. Every error maps to an HTTP response through `IntoResponse`; anything
//! without a dedicated mapping becomes a logged, generic 500.

pub mod animal;
pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        animal::AnimalError, auth::AuthError, config::ConfigError, validation::ValidationError,
    },
};

/// Main error type for the PetPal server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session identity, credentials, account conflicts).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Field-level validation failure on user input.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Animal listing could not be created in the current state.
    #[error(transparent)]
    AnimalError(#[from] AnimalError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing or verification failure.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// A blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    TaskJoinError(#[from] tokio::task::JoinError),
    /// Reading an uploaded image failed.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Malformed multipart request body.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::AnimalError(err) => err.into_response(),
            Self::MultipartError(err) => {
                tracing::debug!("Rejected multipart body: {}", err);

                let (status, error) = if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    (StatusCode::PAYLOAD_TOO_LARGE, "Upload is too large")
                } else {
                    (StatusCode::BAD_REQUEST, "Malformed form data")
                };

                (
                    status,
                    Json(ErrorDto {
                        error: error.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The error is logged in full; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
