use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnimalError {
    #[error("An animal listing requires an owner")]
    OwnerRequired,
    #[error("An animal listing requires a category")]
    CategoryRequired,
    #[error("Category {0} does not exist")]
    CategoryNotFound(i32),
}

impl IntoResponse for AnimalError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
