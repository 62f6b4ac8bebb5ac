/// Application state and router builder
///
/// Defines the shared application state and builds the Axum router with
/// all routes and middleware. The authorization guard runs as a layer on
/// every protected route group, so no handler or database access is
/// reached without a verified identity in the request extensions.
///
/// # Example
///
/// ```no_run
/// use jobtracker_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = jobtracker_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use jobtracker_shared::auth::middleware::{token_auth_middleware, AuthError};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor; the
/// pool and config are cheap to clone (pool is internally shared, config
/// is behind an Arc). The database handle lives here, constructed once
/// at startup. There is no ambient global connection.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the token signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                       # Health check (public)
/// ├── /uploads/*                    # Static serving of uploaded files (public)
/// └── /api/
///     ├── /auth/
///     │   ├── POST /register        # Register, returns token (public)
///     │   └── POST /login           # Login, returns token (public)
///     ├── /boards/                  # (authenticated)
///     │   ├── GET  /                # List caller's boards
///     │   └── POST /                # Create board
///     ├── /jobs/                    # (authenticated)
///     │   ├── GET    /board/:board_id   # List caller's jobs on a board
///     │   ├── POST   /              # Create job
///     │   ├── PUT    /:id           # Update job
///     │   └── DELETE /:id           # Delete job
///     └── /upload/
///         └── POST /                # Multipart file upload (authenticated)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-group token guard)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    // Board routes (require authentication)
    let board_routes = Router::new()
        .route("/", get(routes::boards::list_boards))
        .route("/", post(routes::boards::create_board))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_layer,
        ));

    // Job routes (require authentication)
    let job_routes = Router::new()
        .route("/board/:board_id", get(routes::jobs::list_jobs_for_board))
        .route("/", post(routes::jobs::create_job))
        .route("/:id", put(routes::jobs::update_job))
        .route("/:id", delete(routes::jobs::delete_job))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_layer,
        ));

    // Upload route (requires authentication)
    let upload_routes = Router::new()
        .route("/", post(routes::upload::upload_file))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_layer,
        ));

    // Build the complete /api surface
    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/boards", board_routes)
        .nest("/jobs", job_routes)
        .nest("/upload", upload_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configured allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static(jobtracker_shared::auth::middleware::AUTH_HEADER),
            ])
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .nest_service(
            "/uploads",
            ServeDir::new(state.config.uploads.dir.clone()),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Authorization guard layer
///
/// Delegates to the shared token middleware with the configured signing
/// secret; on success the request carries an `AuthContext` extension.
async fn auth_layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    token_auth_middleware(state.jwt_secret().to_string(), req, next).await
}
