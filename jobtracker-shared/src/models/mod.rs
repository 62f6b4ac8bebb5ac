/// Database models
///
/// This module contains all database models and their CRUD operations.
/// Every read or write of a board or job is scoped to its owning user;
/// unscoped listings never exist.
///
/// # Models
///
/// - `user`: user accounts and stored credentials
/// - `board`: named collections of job applications, one owner each
/// - `job`: tracked job applications, owned by a board and a user
///
/// # Example
///
/// ```no_run
/// use jobtracker_shared::db::pool::{create_pool, DatabaseConfig};
/// use jobtracker_shared::models::user::{CreateUser, User};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: "Jane Doe".to_string(),
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod board;
pub mod job;
pub mod user;
