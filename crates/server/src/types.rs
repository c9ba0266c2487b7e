use serde::{Deserialize, Serialize};

/// The request body for the `/api/chat` endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// The response body for the `/api/chat` endpoint.
///
/// A gateway failure still produces this shape with the fallback text; the
/// `{"response": ..., "error": true}` variant is reserved for unexpected
/// pipeline faults and is built in `errors.rs`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// The response body for a successful image upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadImageResponse {
    pub message: String,
}
