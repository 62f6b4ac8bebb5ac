/// Job model and database operations
///
/// A job is one tracked job application. Every job carries two ownership
/// references: `board_id`, the board it lives on, and `user_id`, a cached
/// copy of the board owner taken at creation time. Ownership checks
/// filter on `user_id` directly instead of joining through the board;
/// the two fields could diverge if board ownership ever became mutable,
/// which it currently never is.
///
/// `status` is a free-form string. Any status can follow any other;
/// there is no workflow state machine.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE jobs (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     company VARCHAR(255) NOT NULL,
///     title VARCHAR(255) NOT NULL,
///     status VARCHAR(255) NOT NULL,
///     date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     notes TEXT,
///     source TEXT,
///     resume TEXT,
///     cover_letter TEXT,
///     interview_process TEXT,
///     interview_questions TEXT,
///     url TEXT,
///     attachments JSONB NOT NULL DEFAULT '[]',
///     board_id UUID NOT NULL REFERENCES boards(id),
///     user_id UUID NOT NULL REFERENCES users(id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

/// Columns returned by every job query, in FromRow order
const JOB_COLUMNS: &str = "id, company, title, status, date, notes, source, resume, \
     cover_letter, interview_process, interview_questions, url, attachments, board_id, user_id";

/// Descriptor of a file attached to a job (name + storage path)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    /// Original file name
    pub name: String,

    /// Storage path, as returned by the upload endpoint
    pub path: String,
}

/// Job model representing one tracked application
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job ID (UUID v4)
    pub id: Uuid,

    /// Company name
    pub company: String,

    /// Position title
    pub title: String,

    /// Free-form status string ("applied", "interviewing", ...)
    pub status: String,

    /// Application date, defaults to creation time
    pub date: DateTime<Utc>,

    /// Free-form notes
    pub notes: Option<String>,

    /// Where the posting was found
    pub source: Option<String>,

    /// Resume reference
    pub resume: Option<String>,

    /// Cover letter reference
    pub cover_letter: Option<String>,

    /// Interview process notes
    pub interview_process: Option<String>,

    /// Interview questions notes
    pub interview_questions: Option<String>,

    /// External posting URL
    pub url: Option<String>,

    /// Attached file descriptors (JSONB)
    pub attachments: Json<Vec<AttachedFile>>,

    /// Board this job lives on
    pub board_id: Uuid,

    /// Owning user; cached copy of the board owner at creation time
    pub user_id: Uuid,
}

/// Input for creating a new job
///
/// The owner is never part of the payload; it comes from the
/// authenticated request context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    /// Company name
    pub company: String,

    /// Position title
    pub title: String,

    /// Free-form status string
    pub status: String,

    /// Application date; omitted = creation time
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Where the posting was found
    #[serde(default)]
    pub source: Option<String>,

    /// Resume reference
    #[serde(default)]
    pub resume: Option<String>,

    /// Cover letter reference
    #[serde(default)]
    pub cover_letter: Option<String>,

    /// Interview process notes
    #[serde(default)]
    pub interview_process: Option<String>,

    /// Interview questions notes
    #[serde(default)]
    pub interview_questions: Option<String>,

    /// External posting URL
    #[serde(default)]
    pub url: Option<String>,

    /// Attached file descriptors
    #[serde(default)]
    pub attachments: Vec<AttachedFile>,

    /// Board the job is created on
    pub board_id: Uuid,
}

/// Input for updating an existing job
///
/// All fields are optional; only present fields are written. This is the
/// typed rendition of an unconstrained merge-patch: every mutable job
/// field is reachable, including `board_id` and `attachments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    /// New company name
    pub company: Option<String>,

    /// New position title
    pub title: Option<String>,

    /// New status string (unconstrained transition)
    pub status: Option<String>,

    /// New application date
    pub date: Option<DateTime<Utc>>,

    /// New notes
    pub notes: Option<String>,

    /// New source
    pub source: Option<String>,

    /// New resume reference
    pub resume: Option<String>,

    /// New cover letter reference
    pub cover_letter: Option<String>,

    /// New interview process notes
    pub interview_process: Option<String>,

    /// New interview questions notes
    pub interview_questions: Option<String>,

    /// New external URL
    pub url: Option<String>,

    /// Replacement attachment list
    pub attachments: Option<Vec<AttachedFile>>,

    /// Move the job to another board. The cached owner is NOT re-derived
    /// from the new board.
    pub board_id: Option<Uuid>,
}

impl UpdateJob {
    /// True if no field is present (an empty patch is a no-op)
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.title.is_none()
            && self.status.is_none()
            && self.date.is_none()
            && self.notes.is_none()
            && self.source.is_none()
            && self.resume.is_none()
            && self.cover_letter.is_none()
            && self.interview_process.is_none()
            && self.interview_questions.is_none()
            && self.url.is_none()
            && self.attachments.is_none()
            && self.board_id.is_none()
    }
}

impl Job {
    /// Creates a new job owned by the given user
    ///
    /// The caller is responsible for having verified that `data.board_id`
    /// belongs to `user_id`; this function records the denormalized owner
    /// as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or a foreign key
    /// constraint is violated.
    pub async fn create(pool: &PgPool, user_id: Uuid, data: CreateJob) -> Result<Self, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO jobs (company, title, status, date, notes, source, resume,
                              cover_letter, interview_process, interview_questions, url,
                              attachments, board_id, user_id)
            VALUES ($1, $2, $3, COALESCE($4, NOW()), $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {JOB_COLUMNS}
            "#
        );

        let job = sqlx::query_as::<_, Job>(&query)
            .bind(data.company)
            .bind(data.title)
            .bind(data.status)
            .bind(data.date)
            .bind(data.notes)
            .bind(data.source)
            .bind(data.resume)
            .bind(data.cover_letter)
            .bind(data.interview_process)
            .bind(data.interview_questions)
            .bind(data.url)
            .bind(Json(data.attachments))
            .bind(data.board_id)
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(job)
    }

    /// Finds a job by ID
    ///
    /// This is the existence half of the existence + ownership sequence
    /// used by update and delete; the ownership comparison happens in the
    /// caller against the returned `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");

        let job = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(job)
    }

    /// Lists all jobs on a board that belong to the given user
    ///
    /// The filter is on the job's own denormalized `user_id`, not a join
    /// through the board: a `board_id` owned by someone else yields an
    /// empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list_for_board(
        pool: &PgPool,
        board_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let query =
            format!("SELECT {JOB_COLUMNS} FROM jobs WHERE board_id = $1 AND user_id = $2 ORDER BY date");

        let jobs = sqlx::query_as::<_, Job>(&query)
            .bind(board_id)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(jobs)
    }

    /// Applies a partial update to a job
    ///
    /// Only fields present in `data` are written. Returns the updated job,
    /// or None if the job no longer exists. The caller's earlier
    /// existence check does not make this impossible, since a concurrent
    /// delete can land between the two accesses.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateJob,
    ) -> Result<Option<Self>, sqlx::Error> {
        if data.is_empty() {
            // Nothing to write; an empty patch returns the current record
            return Self::find_by_id(pool, id).await;
        }

        // Build the SET list from the fields that are present
        let mut clauses: Vec<String> = Vec::new();
        let mut bind_count = 1;

        let columns = [
            ("company", data.company.is_some()),
            ("title", data.title.is_some()),
            ("status", data.status.is_some()),
            ("date", data.date.is_some()),
            ("notes", data.notes.is_some()),
            ("source", data.source.is_some()),
            ("resume", data.resume.is_some()),
            ("cover_letter", data.cover_letter.is_some()),
            ("interview_process", data.interview_process.is_some()),
            ("interview_questions", data.interview_questions.is_some()),
            ("url", data.url.is_some()),
            ("attachments", data.attachments.is_some()),
            ("board_id", data.board_id.is_some()),
        ];

        for (column, present) in columns {
            if present {
                bind_count += 1;
                clauses.push(format!("{} = ${}", column, bind_count));
            }
        }

        let query = format!(
            "UPDATE jobs SET {} WHERE id = $1 RETURNING {}",
            clauses.join(", "),
            JOB_COLUMNS
        );

        let mut q = sqlx::query_as::<_, Job>(&query).bind(id);

        if let Some(company) = data.company {
            q = q.bind(company);
        }
        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }
        if let Some(date) = data.date {
            q = q.bind(date);
        }
        if let Some(notes) = data.notes {
            q = q.bind(notes);
        }
        if let Some(source) = data.source {
            q = q.bind(source);
        }
        if let Some(resume) = data.resume {
            q = q.bind(resume);
        }
        if let Some(cover_letter) = data.cover_letter {
            q = q.bind(cover_letter);
        }
        if let Some(interview_process) = data.interview_process {
            q = q.bind(interview_process);
        }
        if let Some(interview_questions) = data.interview_questions {
            q = q.bind(interview_questions);
        }
        if let Some(url) = data.url {
            q = q.bind(url);
        }
        if let Some(attachments) = data.attachments {
            q = q.bind(Json(attachments));
        }
        if let Some(board_id) = data.board_id {
            q = q.bind(board_id);
        }

        let job = q.fetch_optional(pool).await?;

        Ok(job)
    }

    /// Deletes a job by ID
    ///
    /// Hard delete; jobs own no child entities, so nothing cascades.
    ///
    /// # Returns
    ///
    /// True if the job was deleted, false if it no longer existed
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_job_minimal_payload() {
        let board_id = Uuid::new_v4();
        let payload = json!({
            "company": "Acme",
            "title": "SWE",
            "status": "applied",
            "boardId": board_id,
        });

        let data: CreateJob = serde_json::from_value(payload).expect("Deserialize should succeed");
        assert_eq!(data.company, "Acme");
        assert_eq!(data.status, "applied");
        assert_eq!(data.board_id, board_id);
        assert!(data.date.is_none());
        assert!(data.notes.is_none());
        assert!(data.attachments.is_empty());
    }

    #[test]
    fn test_create_job_with_attachments() {
        let payload = json!({
            "company": "Acme",
            "title": "SWE",
            "status": "applied",
            "boardId": Uuid::new_v4(),
            "coverLetter": "cover-v2",
            "attachments": [{"name": "resume.pdf", "path": "/uploads/123-resume.pdf"}],
        });

        let data: CreateJob = serde_json::from_value(payload).expect("Deserialize should succeed");
        assert_eq!(data.cover_letter.as_deref(), Some("cover-v2"));
        assert_eq!(
            data.attachments,
            vec![AttachedFile {
                name: "resume.pdf".to_string(),
                path: "/uploads/123-resume.pdf".to_string(),
            }]
        );
    }

    #[test]
    fn test_update_job_default_is_empty() {
        let update = UpdateJob::default();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_job_with_field_is_not_empty() {
        let update = UpdateJob {
            status: Some("interviewing".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_attached_file_roundtrip() {
        let file = AttachedFile {
            name: "questions.txt".to_string(),
            path: "/uploads/456-questions.txt".to_string(),
        };

        let json = serde_json::to_string(&file).expect("Serialize should succeed");
        let back: AttachedFile = serde_json::from_str(&json).expect("Deserialize should succeed");
        assert_eq!(file, back);
    }

    // Integration tests for database operations are in
    // jobtracker-api/tests/ownership_test.rs
}
