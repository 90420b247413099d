use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// User input rejected before anything is written.
///
/// Each variant knows which request field it concerns so a client can attach the
/// message to the right input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Password must be at least 7 characters and include lowercase, uppercase, digit and special characters"
    )]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::WeakPassword => "password",
            Self::PasswordMismatch => "confirm_password",
            Self::MissingField(field) => field,
            Self::InvalidField { field, .. } => field,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(field = self.field(), "Rejected input: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(FieldErrorDto {
                error: self.to_string(),
                field: self.field().to_string(),
            }),
        )
            .into_response()
    }
}
