/// Authorization guard for Axum
///
/// Every protected operation is wrapped by this middleware. It extracts
/// the identity token from the fixed `x-auth-token` request header (the
/// wire contract predates this implementation; it is not a
/// Bearer-prefixed `Authorization` header), verifies it, and binds the
/// resolved user identity into the request extensions before any handler
/// or database work runs. Unauthenticated calls are rejected with 401.
///
/// The guard is stateless and has no side effects beyond inserting the
/// [`AuthContext`] extension.
///
/// # Example
///
/// ```no_run
/// use axum::{extract::Request, middleware, middleware::Next, routing::get, Extension, Router};
/// use jobtracker_shared::auth::middleware::{token_auth_middleware, AuthContext};
///
/// async fn protected_handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, user {}!", auth.user_id)
/// }
///
/// let secret = "secret-key-at-least-32-bytes-long!".to_string();
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler))
///     .layer(middleware::from_fn(move |req: Request, next: Next| {
///         token_auth_middleware(secret.clone(), req, next)
///     }));
/// ```

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::jwt::validate_token;

/// Request header carrying the identity token on every protected call
pub const AUTH_HEADER: &str = "x-auth-token";

/// Authentication context added to request extensions
///
/// Inserted by the guard after successful token verification. Handlers
/// extract it with Axum's `Extension` extractor; every ownership-scoped
/// query takes its `user_id` from here, never from the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: Uuid,
}

impl AuthContext {
    /// Creates an auth context for a verified user
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

/// Error type for the authorization guard
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The x-auth-token header is absent
    MissingToken,

    /// The token failed verification (bad signature, malformed, expired)
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let msg = match self {
            AuthError::MissingToken => "No token, authorization denied",
            AuthError::InvalidToken => "Token is not valid",
        };
        (StatusCode::UNAUTHORIZED, Json(json!({ "msg": msg }))).into_response()
    }
}

/// Token authentication middleware
///
/// # Errors
///
/// Returns 401 Unauthorized if:
/// - The x-auth-token header is missing
/// - Token verification fails for any reason
pub async fn token_auth_middleware(
    secret: String,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let claims = validate_token(token, &secret).map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(AuthContext::new(claims.sub));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_context_new() {
        let user_id = Uuid::new_v4();
        let context = AuthContext::new(user_id);
        assert_eq!(context.user_id, user_id);
    }

    #[test]
    fn test_auth_error_into_response() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AuthError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
