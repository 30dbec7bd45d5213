//! Job posting store for `SQLite` persistence.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::ident::LookupKey;
use crate::models::{JobPosting, JobPostingDraft, PostingStatus};
use crate::transport;

use super::{RecordStore, StoreError, StoreResult};

/// `SQLite`-backed store for job posting records, keyed by opaque text ids.
#[derive(Clone)]
pub struct JobPostingStore {
    pool: SqlitePool,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct PostingRow {
    id: String,
    title: String,
    department: String,
    applicants: i64,
    status: String,
    posted_date: String,
}

impl PostingRow {
    /// Convert a database row into the domain model.
    fn into_posting(self) -> StoreResult<JobPosting> {
        let status = PostingStatus::parse(&self.status).map_err(corrupt)?;
        let posted_date =
            transport::parse_timestamp("posted_date", &self.posted_date).map_err(corrupt)?;
        let applicants = u32::try_from(self.applicants)
            .map_err(|err| StoreError::Corrupt(format!("applicants out of range: {err}")))?;

        Ok(JobPosting {
            id: self.id,
            title: self.title,
            department: self.department,
            applicants,
            status,
            posted_date,
        })
    }
}

fn corrupt(err: crate::AppError) -> StoreError {
    StoreError::Corrupt(err.to_string())
}

impl JobPostingStore {
    /// Create a new store instance over the shared pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for JobPostingStore {
    type Record = JobPosting;
    type Draft = JobPostingDraft;

    fn collection(&self) -> &'static str {
        "job_posting"
    }

    async fn find_all(&self) -> StoreResult<Vec<JobPosting>> {
        let rows: Vec<PostingRow> =
            sqlx::query_as("SELECT * FROM job_posting ORDER BY posted_date DESC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(PostingRow::into_posting).collect()
    }

    async fn find_by_key(&self, key: &LookupKey) -> StoreResult<Option<JobPosting>> {
        let id = match key {
            LookupKey::Opaque(raw) => raw.clone(),
            LookupKey::Numeric(n) => n.to_string(),
        };

        let row: Option<PostingRow> = sqlx::query_as("SELECT * FROM job_posting WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(PostingRow::into_posting).transpose()
    }

    async fn insert(&self, draft: JobPostingDraft) -> StoreResult<JobPosting> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO job_posting (id, title, department, applicants, status, posted_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&id)
        .bind(&draft.title)
        .bind(&draft.department)
        .bind(i64::from(draft.applicants))
        .bind(draft.status.as_str())
        .bind(transport::encode_timestamp(&draft.posted_date))
        .execute(&self.pool)
        .await?;

        self.find_by_key(&LookupKey::Opaque(id.clone()))
            .await?
            .ok_or_else(|| StoreError::Backend(format!("inserted job posting {id} not readable")))
    }

    async fn delete_exact(&self, key: &LookupKey) -> StoreResult<()> {
        let id = match key {
            LookupKey::Opaque(raw) => raw.clone(),
            LookupKey::Numeric(n) => {
                return Err(StoreError::KeyMismatch(format!(
                    "job_posting id column is TEXT, got numeric key {n}"
                )));
            }
        };

        let result = sqlx::query("DELETE FROM job_posting WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NoMatch);
        }
        Ok(())
    }

    async fn delete_matching(&self, key: &LookupKey) -> StoreResult<u64> {
        let id = match key {
            LookupKey::Opaque(raw) => raw.clone(),
            LookupKey::Numeric(n) => n.to_string(),
        };

        let result = sqlx::query("DELETE FROM job_posting WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
