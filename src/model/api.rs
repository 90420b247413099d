use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request field fails validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    /// The error message
    pub error: String,
    /// Name of the offending request field
    pub field: String,
}

/// A plain informational response
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponseDto {
    pub message: String,
}
