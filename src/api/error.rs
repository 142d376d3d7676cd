use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::core::errors::HistoryError;

impl IntoResponse for HistoryError {
    fn into_response(self) -> Response {
        match self {
            // Uniform across all endpoints; also covers a missing userId
            // parameter, which is treated as an unknown user.
            HistoryError::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "User not found" })),
            )
                .into_response(),
        }
    }
}
