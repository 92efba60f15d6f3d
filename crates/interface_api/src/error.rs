//! API error handling
//!
//! One consistent error contract for every endpoint: a JSON body of the
//! form `{"error": "<message>"}`. Internal failures log their cause here
//! and surface only the generic message, so database and validation
//! detail never reaches a client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_cards::CardsError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Creates the 404 for an unknown user
    pub fn user_not_found() -> Self {
        ApiError::NotFound("User not found".to_string())
    }

    /// Creates the 404 for an unknown company
    pub fn company_not_found() -> Self {
        ApiError::NotFound("Company not found".to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(cause) => {
                tracing::error!(%cause, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<CardsError> for ApiError {
    fn from(err: CardsError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
