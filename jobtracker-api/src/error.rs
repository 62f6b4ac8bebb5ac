/// Error handling for the API server
///
/// One unified error type maps every domain failure to an HTTP response.
/// Handlers return `Result<T, ApiError>`; no store-layer error is allowed
/// to reach the transport unmapped. Error bodies are always
/// `{"msg": "..."}` with status 400/401/404/500.
///
/// Ownership violations (`Forbidden`) are reported with status 401, the
/// same as authentication failures. The wire contract predates this
/// implementation and is preserved; the variant stays distinct so the
/// taxonomy is visible in code.
///
/// # Example
///
/// ```no_run
/// use jobtracker_api::error::{ApiError, ApiResult};
/// use axum::Json;
///
/// async fn handler() -> ApiResult<Json<serde_json::Value>> {
///     Err(ApiError::NotFound("Job not found".to_string()))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400): missing/invalid fields, duplicate email,
    /// invalid credentials
    BadRequest(String),

    /// Unauthenticated (401): missing or invalid token
    Unauthorized(String),

    /// Valid token, wrong owner (reported as 401 on the wire)
    Forbidden(String),

    /// Not found (404)
    NotFound(String),

    /// Internal server error (500); the cause is logged, never leaked
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub msg: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            // Reference behavior: ownership violations reuse 401
            ApiError::Forbidden(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                // Log the cause server-side; the client gets a generic message
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { msg })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Unique constraint on users.email backstops the explicit
                // duplicate lookup done at registration
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::BadRequest("User already exists".to_string());
                    }
                }

                ApiError::Internal(format!("Database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert guard errors to API errors
impl From<jobtracker_shared::auth::middleware::AuthError> for ApiError {
    fn from(err: jobtracker_shared::auth::middleware::AuthError) -> Self {
        match err {
            jobtracker_shared::auth::middleware::AuthError::MissingToken => {
                ApiError::Unauthorized("No token, authorization denied".to_string())
            }
            jobtracker_shared::auth::middleware::AuthError::InvalidToken => {
                ApiError::Unauthorized("Token is not valid".to_string())
            }
        }
    }
}

/// Convert token errors to API errors
impl From<jobtracker_shared::auth::jwt::JwtError> for ApiError {
    fn from(err: jobtracker_shared::auth::jwt::JwtError) -> Self {
        match err {
            jobtracker_shared::auth::jwt::JwtError::CreateError(msg) => {
                ApiError::Internal(format!("Token creation failed: {}", msg))
            }
            _ => ApiError::Unauthorized("Token is not valid".to_string()),
        }
    }
}

/// Convert password errors to API errors
impl From<jobtracker_shared::auth::password::PasswordError> for ApiError {
    fn from(err: jobtracker_shared::auth::password::PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Convert request validation failures to API errors
impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let msg = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        ApiError::BadRequest(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid input");

        let err = ApiError::NotFound("Job not found".to_string());
        assert_eq!(err.to_string(), "Not found: Job not found");
    }

    #[test]
    fn test_status_codes() {
        let response = ApiError::BadRequest("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Unauthorized("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Ownership violations reuse 401 on the wire
        let response = ApiError::Forbidden("Not authorized".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ApiError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_guard_errors_map_to_401() {
        use jobtracker_shared::auth::middleware::AuthError;

        let err: ApiError = AuthError::MissingToken.into();
        assert!(matches!(err, ApiError::Unauthorized(_)));

        let err: ApiError = AuthError::InvalidToken.into();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
