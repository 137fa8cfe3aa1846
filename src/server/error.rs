use crate::extractor::ExtractionError;
use crate::narration::NarrationError;
use crate::server::generate::GENERATE_FAILED;
use crate::server::generate_audio::GENERATE_AUDIO_FAILED;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

/// Uniform failure response: a status and a `{ "error": message }` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// A request body that could not be read fails like any other step of the request.
    pub fn rejected(rejection: JsonRejection, message: &str) -> Self {
        warn!("⚠️ Rejected request body ({}): {}", rejection.status(), rejection.body_text());
        ApiError::internal(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<ExtractionError> for ApiError {
    fn from(error: ExtractionError) -> Self {
        warn!("⚠️ Error processing trip request: {}", error);
        ApiError::internal(GENERATE_FAILED)
    }
}

impl From<NarrationError> for ApiError {
    fn from(error: NarrationError) -> Self {
        warn!("⚠️ Error generating audio: {}", error);
        match error {
            NarrationError::UnsupportedOutput => ApiError::internal("Invalid output format"),
            _ => ApiError::internal(GENERATE_AUDIO_FAILED),
        }
    }
}
