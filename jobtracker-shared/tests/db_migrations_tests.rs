/// Integration tests for the migration runner
///
/// Requires TEST_DATABASE_URL; skips itself when unset.

use jobtracker_shared::db::{
    migrations::{ensure_database_exists, run_migrations},
    pool::{close_pool, create_pool, DatabaseConfig},
};

#[tokio::test]
async fn test_migrations_run_and_are_idempotent() {
    let Some(url) = std::env::var("TEST_DATABASE_URL").ok() else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return;
    };

    ensure_database_exists(&url)
        .await
        .expect("Failed to ensure database exists");

    let pool = create_pool(DatabaseConfig {
        url,
        max_connections: 2,
        ..Default::default()
    })
    .await
    .expect("Failed to create pool");

    // First run applies anything pending; second run is a no-op
    run_migrations(&pool).await.expect("First run should succeed");
    run_migrations(&pool).await.expect("Second run should succeed");

    // The schema exists afterwards
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name::text FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_name IN ('users', 'boards', 'jobs')",
    )
    .fetch_all(&pool)
    .await
    .expect("Schema query should succeed");

    assert_eq!(tables.len(), 3, "users, boards, jobs should all exist");

    close_pool(pool).await;
}
