/// Board endpoints
///
/// Boards are named collections of job applications. Every operation is
/// scoped to the authenticated caller bound by the guard; no unscoped
/// listing exists.
///
/// # Endpoints
///
/// - `GET /api/boards` - List the caller's boards
/// - `POST /api/boards` - Create a board owned by the caller

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Extension, Json};
use jobtracker_shared::{
    auth::middleware::AuthContext,
    models::board::{Board, CreateBoard},
};
use serde::Deserialize;
use validator::Validate;

/// Create board request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBoardRequest {
    /// Board name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Lists all boards owned by the caller
///
/// # Endpoint
///
/// ```text
/// GET /api/boards
/// x-auth-token: <token>
/// ```
pub async fn list_boards(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Board>>> {
    let boards = Board::list_by_user(&state.db, auth.user_id).await?;

    Ok(Json(boards))
}

/// Creates a board owned by the caller
///
/// The owner reference is set from the authenticated identity, never
/// from the payload, and never changes afterwards.
///
/// # Endpoint
///
/// ```text
/// POST /api/boards
/// x-auth-token: <token>
/// Content-Type: application/json
///
/// { "name": "Search 2024" }
/// ```
pub async fn create_board(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateBoardRequest>,
) -> ApiResult<Json<Board>> {
    req.validate()?;

    let board = Board::create(
        &state.db,
        CreateBoard {
            name: req.name,
            user_id: auth.user_id,
        },
    )
    .await?;

    Ok(Json(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_board_request_validation() {
        let req = CreateBoardRequest {
            name: "Search 2024".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = CreateBoardRequest {
            name: "".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
