/// Authentication and authorization utilities
///
/// This module provides the identity layer of the system:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: signed identity token generation and validation
/// - [`middleware`]: the authorization guard that binds a verified user
///   identity to each protected request
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with per-password random salts
/// - **Identity Tokens**: HS256 signing with a fixed 100 hour lifetime
/// - **Constant-time Comparison**: password verification never
///   short-circuits on mismatched bytes
///
/// # Example
///
/// ```no_run
/// use jobtracker_shared::auth::password::{hash_password, verify_password};
/// use jobtracker_shared::auth::jwt::{create_token, validate_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Password authentication
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// // Identity token round-trip
/// let claims = Claims::new(Uuid::new_v4());
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long!")?;
/// let verified = validate_token(&token, "secret-key-at-least-32-bytes-long!")?;
/// assert_eq!(verified.sub, claims.sub);
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
