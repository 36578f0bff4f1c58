use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::completion::errors::CompletionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CompletionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, error, message) = match self {
            CompletionError::PromptRequired => {
                (StatusCode::BAD_REQUEST, "Prompt is required".to_string(), None)
            }
            CompletionError::SearchTermRequired => (
                StatusCode::BAD_REQUEST,
                "Search term is required".to_string(),
                None,
            ),
            CompletionError::NotFound => (
                StatusCode::NOT_FOUND,
                "Completion not found".to_string(),
                None,
            ),
            // The upstream message passes through; the status stays diagnostic.
            CompletionError::Upstream { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process request".to_string(),
                Some(message),
            ),
            CompletionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                None,
            ),
        };

        (status, Json(ErrorResponse { error, message }))
    }
}
