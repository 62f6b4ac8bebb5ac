//! # Jobtracker API Server
//!
//! HTTP API for the job application tracker: authenticated users
//! organize applications into boards, with every resource operation
//! scoped to its owner.
//!
//! ## Startup sequence
//!
//! 1. Initialize tracing
//! 2. Load configuration (fails fast if `JWT_SECRET` or `DATABASE_URL`
//!    is missing; there is no compiled-in fallback secret)
//! 3. Create the database if needed, connect the pool, run migrations
//! 4. Serve until a shutdown signal arrives
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p jobtracker-api
//! ```

use jobtracker_api::{
    app::{build_router, AppState},
    config::Config,
};
use jobtracker_shared::db::{migrations, pool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobtracker_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Jobtracker API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration; refuses to start without a signing secret
    let config = Config::from_env()?;

    // Connect the database and bring the schema up to date
    migrations::ensure_database_exists(&config.database.url).await?;

    let db = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    migrations::run_migrations(&db).await?;

    // Make sure the upload directory exists before serving it
    tokio::fs::create_dir_all(&config.uploads.dir).await?;

    let bind_address = config.bind_address();
    let state = AppState::new(db.clone(), config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;

    Ok(())
}

/// Resolves when a shutdown signal is received
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received, exiting...");
}
