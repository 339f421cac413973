use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/content
/// Returns the stored document verbatim.
pub async fn get_content(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.store.read_raw().await?))
}

/// POST /api/content
/// Replaces the stored document with the request body. Any well-formed JSON
/// is accepted and persisted as-is — shape is the admin client's problem.
pub async fn replace_content(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    state.store.write_raw(&body).await?;
    Ok(Json(json!({ "success": true, "message": "Data updated" })))
}

/// POST /api/upload
/// Accepts a multipart form with a single `resume` field, stores the file
/// at the fixed upload path, and patches `resumeUrl` into the document.
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let bytes = read_resume_field(&mut multipart).await?;
    let Some(bytes) = bytes else {
        return Err(AppError::Validation("No file uploaded".to_string()));
    };

    let path = state
        .store
        .save_resume(&state.config.upload_dir, &bytes)
        .await?;
    Ok(Json(json!({ "success": true, "filePath": path })))
}

/// Pulls the `resume` field out of a multipart body, if present.
/// Shared with the admin panel's upload form handler.
pub async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<Bytes>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?;
            return Ok(Some(bytes));
        }
    }
    Ok(None)
}
