use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SplitroomError;

#[derive(Deserialize, ToSchema)]
pub struct SetRoundingRequest {
    pub rounding: f64,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitroomError to implement IntoResponse
pub struct ApiError(pub SplitroomError);

impl From<SplitroomError> for ApiError {
    fn from(err: SplitroomError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            SplitroomError::UnknownCurrency(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SplitroomError::RateFetch(_) => StatusCode::BAD_GATEWAY,
            SplitroomError::RoomNotFound(_) | SplitroomError::MemberNotFound(_) => StatusCode::NOT_FOUND,
            SplitroomError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            SplitroomError::InternalServerError(_)
            | SplitroomError::StorageError(_)
            | SplitroomError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self.0 {
            SplitroomError::InvalidInput(field, detail) => {
                format!("Invalid input for {}: {}", field, detail.description)
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
