//! Payroll run store for `SQLite` persistence.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::ident::LookupKey;
use crate::models::{PayrollRun, PayrollRunDraft, PayrollStatus};
use crate::transport;

use super::{RecordStore, StoreError, StoreResult};

/// `SQLite`-backed store for payroll run records, keyed by opaque text ids.
#[derive(Clone)]
pub struct PayrollStore {
    pool: SqlitePool,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct PayrollRow {
    id: String,
    period: String,
    pay_date: String,
    employees_paid: i64,
    total_amount: String,
    status: String,
}

impl PayrollRow {
    /// Convert a database row into the domain model.
    fn into_run(self) -> StoreResult<PayrollRun> {
        let status = PayrollStatus::parse(&self.status).map_err(corrupt)?;
        let pay_date = transport::parse_timestamp("pay_date", &self.pay_date).map_err(corrupt)?;
        let total_amount =
            transport::parse_decimal("total_amount", &self.total_amount).map_err(corrupt)?;
        let employees_paid = u32::try_from(self.employees_paid)
            .map_err(|err| StoreError::Corrupt(format!("employees_paid out of range: {err}")))?;

        Ok(PayrollRun {
            id: self.id,
            period: self.period,
            pay_date,
            employees_paid,
            total_amount,
            status,
        })
    }
}

fn corrupt(err: crate::AppError) -> StoreError {
    StoreError::Corrupt(err.to_string())
}

impl PayrollStore {
    /// Create a new store instance over the shared pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PayrollStore {
    type Record = PayrollRun;
    type Draft = PayrollRunDraft;

    fn collection(&self) -> &'static str {
        "payroll_run"
    }

    async fn find_all(&self) -> StoreResult<Vec<PayrollRun>> {
        let rows: Vec<PayrollRow> =
            sqlx::query_as("SELECT * FROM payroll_run ORDER BY pay_date DESC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(PayrollRow::into_run).collect()
    }

    async fn find_by_key(&self, key: &LookupKey) -> StoreResult<Option<PayrollRun>> {
        // Lenient: a numeric key may still match a text id literally.
        let id = match key {
            LookupKey::Opaque(raw) => raw.clone(),
            LookupKey::Numeric(n) => n.to_string(),
        };

        let row: Option<PayrollRow> = sqlx::query_as("SELECT * FROM payroll_run WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(PayrollRow::into_run).transpose()
    }

    async fn insert(&self, draft: PayrollRunDraft) -> StoreResult<PayrollRun> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO payroll_run (id, period, pay_date, employees_paid, total_amount, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&id)
        .bind(&draft.period)
        .bind(transport::encode_timestamp(&draft.pay_date))
        .bind(i64::from(draft.employees_paid))
        .bind(draft.total_amount.to_string())
        .bind(draft.status.as_str())
        .execute(&self.pool)
        .await?;

        self.find_by_key(&LookupKey::Opaque(id.clone()))
            .await?
            .ok_or_else(|| StoreError::Backend(format!("inserted payroll run {id} not readable")))
    }

    async fn delete_exact(&self, key: &LookupKey) -> StoreResult<()> {
        let id = match key {
            LookupKey::Opaque(raw) => raw.clone(),
            LookupKey::Numeric(n) => {
                return Err(StoreError::KeyMismatch(format!(
                    "payroll_run id column is TEXT, got numeric key {n}"
                )));
            }
        };

        let result = sqlx::query("DELETE FROM payroll_run WHERE id = ?1")
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

        let result = sqlx::query("DELETE FROM payroll_run WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
