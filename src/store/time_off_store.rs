//! Time-off request store for `SQLite` persistence.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::ident::LookupKey;
use crate::models::{LeaveType, TimeOffRequest, TimeOffRequestDraft, TimeOffStatus};
use crate::transport;

use super::{RecordStore, StoreError, StoreResult};

/// `SQLite`-backed store for time-off requests, keyed by opaque text ids.
#[derive(Clone)]
pub struct TimeOffStore {
    pool: SqlitePool,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct TimeOffRow {
    id: String,
    employee_name: String,
    start_date: String,
    end_date: String,
    days: i64,
    leave_type: String,
    status: String,
}

impl TimeOffRow {
    /// Convert a database row into the domain model.
    fn into_request(self) -> StoreResult<TimeOffRequest> {
        let kind = LeaveType::parse(&self.leave_type).map_err(corrupt)?;
        let status = TimeOffStatus::parse(&self.status).map_err(corrupt)?;
        let start_date =
            transport::parse_timestamp("start_date", &self.start_date).map_err(corrupt)?;
        let end_date = transport::parse_timestamp("end_date", &self.end_date).map_err(corrupt)?;
        let days = u32::try_from(self.days)
            .map_err(|err| StoreError::Corrupt(format!("days out of range: {err}")))?;

        Ok(TimeOffRequest {
            id: self.id,
            employee_name: self.employee_name,
            start_date,
            end_date,
            days,
            kind,
            status,
        })
    }
}

fn corrupt(err: crate::AppError) -> StoreError {
    StoreError::Corrupt(err.to_string())
}

impl TimeOffStore {
    /// Create a new store instance over the shared pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for TimeOffStore {
    type Record = TimeOffRequest;
    type Draft = TimeOffRequestDraft;

    fn collection(&self) -> &'static str {
        "time_off_request"
    }

    async fn find_all(&self) -> StoreResult<Vec<TimeOffRequest>> {
        let rows: Vec<TimeOffRow> =
            sqlx::query_as("SELECT * FROM time_off_request ORDER BY start_date DESC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(TimeOffRow::into_request).collect()
    }

    async fn find_by_key(&self, key: &LookupKey) -> StoreResult<Option<TimeOffRequest>> {
        let id = match key {
            LookupKey::Opaque(raw) => raw.clone(),
            LookupKey::Numeric(n) => n.to_string(),
        };

        let row: Option<TimeOffRow> =
            sqlx::query_as("SELECT * FROM time_off_request WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(TimeOffRow::into_request).transpose()
    }

    async fn insert(&self, draft: TimeOffRequestDraft) -> StoreResult<TimeOffRequest> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO time_off_request
                 (id, employee_name, start_date, end_date, days, leave_type, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&id)
        .bind(&draft.employee_name)
        .bind(transport::encode_timestamp(&draft.start_date))
        .bind(transport::encode_timestamp(&draft.end_date))
        .bind(i64::from(draft.days))
        .bind(draft.kind.as_str())
        .bind(draft.status.as_str())
        .execute(&self.pool)
        .await?;

        self.find_by_key(&LookupKey::Opaque(id.clone()))
            .await?
            .ok_or_else(|| {
                StoreError::Backend(format!("inserted time-off request {id} not readable"))
            })
    }

    async fn delete_exact(&self, key: &LookupKey) -> StoreResult<()> {
        let id = match key {
            LookupKey::Opaque(raw) => raw.clone(),
            LookupKey::Numeric(n) => {
                return Err(StoreError::KeyMismatch(format!(
                    "time_off_request id column is TEXT, got numeric key {n}"
                )));
            }
        };

        let result = sqlx::query("DELETE FROM time_off_request WHERE id = ?1")
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

        let result = sqlx::query("DELETE FROM time_off_request WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
