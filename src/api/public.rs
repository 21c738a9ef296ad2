//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

use crate::openai::CompletionError;

// Errors

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub struct ApiError(anyhow::Error);

/// Convert `ApiError` into an Axum compatible response. Model
/// provider failures get their own status code, everything else is a
/// 500.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0.downcast_ref::<CompletionError>() {
            Some(CompletionError::QuotaExceeded) => (
                StatusCode::TOO_MANY_REQUESTS,
                String::from("OpenAI: quota exceeded. Check plan & billing."),
            ),
            Some(CompletionError::AuthenticationFailed) => (
                StatusCode::UNAUTHORIZED,
                String::from("OpenAI: invalid API key."),
            ),
            Some(CompletionError::Provider(msg)) => {
                (StatusCode::BAD_GATEWAY, format!("OpenAI error: {}", msg))
            }
            Some(CompletionError::Unknown(_)) | None => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
        };

        // Always log the error
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::error!("{}", self.0);
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
