use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prism::PipelineError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within
/// the server, allowing them to be converted into appropriate HTTP
/// responses. Gateway failures never reach this type: they are masked into
/// the fallback text inside the pipeline and answered as a normal success.
pub enum AppError {
    /// Unexpected faults from the pipeline (data retrieval, serialization).
    Pipeline(PipelineError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
    /// Malformed or incomplete client input.
    BadRequest(String),
    /// A referenced resource does not exist.
    NotFound(String),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Pipeline(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Pipeline(err) => {
                error!("Pipeline error: {err:?}");
                let body = Json(json!({
                    "response": format!("Error: {err}"),
                    "error": true,
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                let body = Json(json!({
                    "response": "Error: an internal server error occurred.",
                    "error": true,
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::BadRequest(message) => {
                let body = Json(json!({ "error": message }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::NotFound(message) => {
                let body = Json(json!({ "error": message }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}
