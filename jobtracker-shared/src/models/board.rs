/// Board model and database operations
///
/// A board is a named collection of job applications belonging to one
/// user. The owner reference is set once at creation and never changes;
/// boards are never deleted in scope.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE boards (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     user_id UUID NOT NULL REFERENCES users(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Board model representing a named collection of jobs
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique board ID (UUID v4)
    pub id: Uuid,

    /// Board name
    pub name: String,

    /// Owning user, set once at creation
    pub user_id: Uuid,

    /// When the board was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoard {
    /// Board name
    pub name: String,

    /// Owning user
    pub user_id: Uuid,
}

impl Board {
    /// Creates a new board owned by the given user
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &PgPool, data: CreateBoard) -> Result<Self, sqlx::Error> {
        let board = sqlx::query_as::<_, Board>(
            r#"
            INSERT INTO boards (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(board)
    }

    /// Lists all boards owned by a user
    ///
    /// The listing is always scoped to one owner; there is no unscoped
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let boards = sqlx::query_as::<_, Board>(
            r#"
            SELECT id, name, user_id, created_at
            FROM boards
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(boards)
    }

    /// Finds a board by id, but only if the given user owns it
    ///
    /// Used by job creation to verify the target board belongs to the
    /// caller. Returns None both for unknown ids and for boards owned by
    /// someone else, so callers cannot probe for foreign board ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_owned(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let board = sqlx::query_as::<_, Board>(
            r#"
            SELECT id, name, user_id, created_at
            FROM boards
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_serializes_camel_case() {
        let board = Board {
            id: Uuid::new_v4(),
            name: "Search 2024".to_string(),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&board).expect("Serialize should succeed");
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("user_id").is_none());
    }
}
