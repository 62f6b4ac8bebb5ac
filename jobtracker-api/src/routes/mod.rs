/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: health check endpoint
/// - `auth`: authentication endpoints (register, login)
/// - `boards`: board listing and creation
/// - `jobs`: ownership-scoped job CRUD
/// - `upload`: multipart file upload

pub mod auth;
pub mod boards;
pub mod health;
pub mod jobs;
pub mod upload;
