//! Employee store for `SQLite` persistence.
//!
//! The `employee` table declares an `INTEGER` primary key, so an opaque
//! lookup key is a shape mismatch here; the gateway's numeric retry is what
//! makes string-form ids work against this store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::ident::LookupKey;
use crate::models::{Employee, EmployeeDraft, EmployeeStatus};
use crate::transport;

use super::{RecordStore, StoreError, StoreResult};

/// `SQLite`-backed store for employee records.
#[derive(Clone)]
pub struct EmployeeStore {
    pool: SqlitePool,
}

/// Internal row struct for `SQLite` deserialization.
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    email: String,
    department: String,
    status: String,
    salary: String,
    hire_date: String,
}

impl EmployeeRow {
    /// Convert a database row into the domain model.
    fn into_employee(self) -> StoreResult<Employee> {
        let status = EmployeeStatus::parse(&self.status).map_err(corrupt)?;
        let salary = transport::parse_decimal("salary", &self.salary).map_err(corrupt)?;
        let hire_date = transport::parse_timestamp("hire_date", &self.hire_date).map_err(corrupt)?;

        Ok(Employee {
            id: self.id.to_string(),
            name: self.name,
            email: self.email,
            department: self.department,
            status,
            salary,
            hire_date,
        })
    }
}

fn corrupt(err: crate::AppError) -> StoreError {
    StoreError::Corrupt(err.to_string())
}

impl EmployeeStore {
    /// Create a new store instance over the shared pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for EmployeeStore {
    type Record = Employee;
    type Draft = EmployeeDraft;

    fn collection(&self) -> &'static str {
        "employee"
    }

    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        let rows: Vec<EmployeeRow> =
            sqlx::query_as("SELECT * FROM employee ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(EmployeeRow::into_employee).collect()
    }

    async fn find_by_key(&self, key: &LookupKey) -> StoreResult<Option<Employee>> {
        // Lenient: an opaque key cannot select an integer-keyed row.
        let LookupKey::Numeric(id) = key else {
            return Ok(None);
        };

        let row: Option<EmployeeRow> = sqlx::query_as("SELECT * FROM employee WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    async fn insert(&self, draft: EmployeeDraft) -> StoreResult<Employee> {
        let result = sqlx::query(
            "INSERT INTO employee (name, email, department, status, salary, hire_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.department)
        .bind(draft.status.as_str())
        .bind(draft.salary.to_string())
        .bind(transport::encode_timestamp(&draft.hire_date))
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_key(&LookupKey::Numeric(id))
            .await?
            .ok_or_else(|| StoreError::Backend(format!("inserted employee {id} not readable")))
    }

    async fn delete_exact(&self, key: &LookupKey) -> StoreResult<()> {
        let id = match key {
            LookupKey::Numeric(id) => *id,
            LookupKey::Opaque(raw) => {
                return Err(StoreError::KeyMismatch(format!(
                    "employee id column is INTEGER, got opaque key {raw:?}"
                )));
            }
        };

        let result = sqlx::query("DELETE FROM employee WHERE id = ?1")
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
            LookupKey::Numeric(id) => *id,
            LookupKey::Opaque(_) => return Ok(0),
        };

        let result = sqlx::query("DELETE FROM employee WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
