//! # Jobtracker Shared Library
//!
//! This crate contains the domain logic shared by the jobtracker API
//! server: authentication primitives and ownership-scoped data access.
//!
//! ## Module Organization
//!
//! - `auth`: password hashing, identity tokens, and the request guard
//! - `db`: connection pool and migrations
//! - `models`: database models (`User`, `Board`, `Job`) and their
//!   owner-scoped CRUD operations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the jobtracker shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
