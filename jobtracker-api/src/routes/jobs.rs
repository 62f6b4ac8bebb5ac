/// Job endpoints
///
/// Ownership-scoped CRUD for tracked job applications. Reads filter on
/// the job's denormalized owner field; update and delete run an
/// existence check followed by an ownership check before touching the
/// record. The existence check and the mutation are two separate store
/// accesses; a concurrent delete between them resolves to 404 on the
/// second access.
///
/// # Endpoints
///
/// - `GET /api/jobs/board/:board_id` - List the caller's jobs on a board
/// - `POST /api/jobs` - Create a job
/// - `PUT /api/jobs/:id` - Update a job
/// - `DELETE /api/jobs/:id` - Delete a job

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use jobtracker_shared::{
    auth::middleware::AuthContext,
    models::{
        board::Board,
        job::{CreateJob, Job, UpdateJob},
    },
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confirmation body for delete
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation message
    pub msg: String,
}

/// Lists the caller's jobs on a board
///
/// The filter is `board_id AND owner = caller`: a board id owned by
/// someone else yields an empty list, not an error. Board ownership is
/// deliberately not re-verified through a join here.
///
/// # Endpoint
///
/// ```text
/// GET /api/jobs/board/:board_id
/// x-auth-token: <token>
/// ```
pub async fn list_jobs_for_board(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(board_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Job>>> {
    let jobs = Job::list_for_board(&state.db, board_id, auth.user_id).await?;

    Ok(Json(jobs))
}

/// Creates a job owned by the caller
///
/// The target board must belong to the caller; an unknown or foreign
/// board id is reported as 404 so foreign board ids are not confirmed
/// to exist. The job's owner field is recorded from the authenticated
/// identity at creation time.
///
/// # Endpoint
///
/// ```text
/// POST /api/jobs
/// x-auth-token: <token>
/// Content-Type: application/json
///
/// {
///   "company": "Acme",
///   "title": "SWE",
///   "status": "applied",
///   "boardId": "..."
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: board does not exist or is not the caller's
/// - `500 Internal Server Error`: server error
pub async fn create_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateJob>,
) -> ApiResult<Json<Job>> {
    Board::find_owned(&state.db, req.board_id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Board not found".to_string()))?;

    let job = Job::create(&state.db, auth.user_id, req).await?;

    Ok(Json(job))
}

/// Updates a job
///
/// Check sequence: existence (404), then ownership (401), then the
/// patch. Only fields present in the payload are written.
///
/// # Endpoint
///
/// ```text
/// PUT /api/jobs/:id
/// x-auth-token: <token>
/// Content-Type: application/json
///
/// { "status": "interviewing" }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no job with that id
/// - `401 Unauthorized`: the job belongs to someone else
/// - `500 Internal Server Error`: server error
pub async fn update_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJob>,
) -> ApiResult<Json<Job>> {
    let job = Job::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    if job.user_id != auth.user_id {
        return Err(ApiError::Forbidden("Not authorized".to_string()));
    }

    // Second store access; the job can have been deleted since the check
    let updated = Job::update(&state.db, id, req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    Ok(Json(updated))
}

/// Deletes a job
///
/// Same existence + ownership sequence as update; on success the job is
/// permanently removed.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/jobs/:id
/// x-auth-token: <token>
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no job with that id
/// - `401 Unauthorized`: the job belongs to someone else
/// - `500 Internal Server Error`: server error
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let job = Job::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    if job.user_id != auth.user_id {
        return Err(ApiError::Forbidden("Not authorized".to_string()));
    }

    // Tolerate a concurrent delete between the check and the removal
    let deleted = Job::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Job not found".to_string()));
    }

    Ok(Json(MessageResponse {
        msg: "Job removed".to_string(),
    }))
}
