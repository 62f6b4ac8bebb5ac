/// File upload endpoint
///
/// Accepts a multipart form with a `file` field, writes it to the
/// configured upload directory under a `{millis}-{name}` file name, and
/// returns the public path that the static `/uploads` route serves.
/// Attachment descriptors referencing these paths are stored on jobs.
///
/// The endpoint sits behind the authorization guard like every other
/// mutating route.
///
/// # Endpoint
///
/// ```text
/// POST /api/upload
/// x-auth-token: <token>
/// Content-Type: multipart/form-data
/// ```
///
/// # Response
///
/// ```json
/// { "filePath": "/uploads/1717243445123-resume.pdf" }
/// ```

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upload response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public path of the stored file
    pub file_path: String,
}

/// Multipart file upload handler
///
/// # Errors
///
/// - `400 Bad Request`: no `file` field present or the body is malformed
/// - `500 Internal Server Error`: the file could not be written
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("File upload failed".to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(sanitize_file_name)
            .unwrap_or_else(|| "file".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::BadRequest("File upload failed".to_string()))?;

        let file_name = format!("{}-{}", Utc::now().timestamp_millis(), original_name);
        let dir = &state.config.uploads.dir;

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to create upload dir: {}", e)))?;

        tokio::fs::write(Path::new(dir).join(&file_name), &data)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to store upload: {}", e)))?;

        return Ok(Json(UploadResponse {
            file_path: format!("/uploads/{}", file_name),
        }));
    }

    Err(ApiError::BadRequest("File upload failed".to_string()))
}

/// Strips any path components from a client-supplied file name
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    if base.is_empty() {
        "file".to_string()
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name_plain() {
        assert_eq!(sanitize_file_name("resume.pdf"), "resume.pdf");
    }

    #[test]
    fn test_sanitize_file_name_strips_paths() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\temp\\resume.pdf"), "resume.pdf");
    }

    #[test]
    fn test_sanitize_file_name_empty() {
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name("uploads/"), "file");
    }
}
