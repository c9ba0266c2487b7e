//! # Sample Image Endpoints
//!
//! Stores and serves the optional photo attached to a Sample, as raw bytes
//! against the row's blob column.

use crate::{errors::AppError, state::AppState, types::UploadImageResponse};
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Multipart;
use tracing::info;

/// Handler for `POST /api/upload_image/{sample_id}`.
///
/// Expects a multipart form with an `image` field carrying the file bytes.
pub async fn upload_image_handler(
    State(app_state): State<AppState>,
    Path(sample_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<UploadImageResponse>, AppError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            image_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read image field: {e}")))?
                    .to_vec(),
            );
        }
    }

    let image_data =
        image_data.ok_or_else(|| AppError::BadRequest("No image file uploaded".to_string()))?;

    let stored = app_state
        .sqlite_provider
        .store_sample_image(sample_id, image_data)
        .await?;
    if !stored {
        return Err(AppError::NotFound(format!("Sample {sample_id} not found")));
    }

    info!("Stored image for sample {sample_id}");
    Ok(Json(UploadImageResponse {
        message: format!("Image uploaded for sample {sample_id}"),
    }))
}

/// Handler for `GET /api/sample_image/{sample_id}`.
///
/// Returns the stored bytes with an image content type. A Sample without an
/// uploaded image is a 404, never an empty success.
pub async fn sample_image_handler(
    State(app_state): State<AppState>,
    Path(sample_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    match app_state
        .sqlite_provider
        .load_sample_image(sample_id)
        .await?
    {
        Some(bytes) => Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes)),
        None => Err(AppError::NotFound("Image not found".to_string())),
    }
}
