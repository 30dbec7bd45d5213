//! Relational store contract and its `SQLite` implementations.
//!
//! The application core reaches the store only through [`RecordStore`], a
//! find/create/delete contract whose error type distinguishes a
//! **structural no-match** (the key provably selects nothing) from a
//! **key-type mismatch** (the key's shape is incompatible with the declared
//! primary-key column). The record gateway's delete fallback relies on that
//! distinction; conflating the two would turn "wrong key interpretation"
//! into a spurious not-found.

pub mod db;
pub mod employee_store;
pub mod job_posting_store;
pub mod payroll_store;
pub mod schema;
pub mod seed;
pub mod time_off_store;

use std::fmt::{Display, Formatter};

use async_trait::async_trait;

use crate::ident::LookupKey;

pub use employee_store::EmployeeStore;
pub use job_posting_store::JobPostingStore;
pub use payroll_store::PayrollStore;
pub use time_off_store::TimeOffStore;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure modes reported by a record store.
#[derive(Debug)]
pub enum StoreError {
    /// No row matches the key; the record provably does not exist under it.
    NoMatch,
    /// The key's shape is incompatible with the declared key column type.
    KeyMismatch(String),
    /// A uniqueness constraint was violated.
    UniqueViolation(String),
    /// A CHECK or NOT NULL constraint was violated.
    ConstraintViolation(String),
    /// A stored value cannot be decoded into the domain model.
    Corrupt(String),
    /// Connectivity or any other backend failure.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => write!(f, "no matching row"),
            Self::KeyMismatch(msg) => write!(f, "key mismatch: {msg}"),
            Self::UniqueViolation(msg) => write!(f, "unique violation: {msg}"),
            Self::ConstraintViolation(msg) => write!(f, "constraint violation: {msg}"),
            Self::Corrupt(msg) => write!(f, "corrupt row: {msg}"),
            Self::Backend(msg) => write!(f, "backend: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            return match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    Self::UniqueViolation(db_err.to_string())
                }
                sqlx::error::ErrorKind::CheckViolation
                | sqlx::error::ErrorKind::NotNullViolation => {
                    Self::ConstraintViolation(db_err.to_string())
                }
                _ => Self::Backend(db_err.to_string()),
            };
        }
        Self::Backend(err.to_string())
    }
}

/// Find/create/delete contract for one record collection.
///
/// `delete_exact` interprets the key strictly against the declared key
/// column and reports [`StoreError::KeyMismatch`] when the shapes disagree;
/// `find_by_key` is lenient and treats an impossible key shape as absence.
/// `delete_matching` is the non-throwing arbiter: it reports how many rows
/// matched instead of failing when none did.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Domain record type held in the collection.
    type Record: Send + Sync;
    /// Create-operation input; the store assigns the id.
    type Draft: Send;

    /// Collection name used in logs and error messages.
    fn collection(&self) -> &'static str;

    /// Materialize the full collection in its default display order.
    async fn find_all(&self) -> StoreResult<Vec<Self::Record>>;

    /// Look up a single record; `Ok(None)` when no row matches.
    async fn find_by_key(&self, key: &LookupKey) -> StoreResult<Option<Self::Record>>;

    /// Insert a record; the store assigns and returns the new id.
    async fn insert(&self, draft: Self::Draft) -> StoreResult<Self::Record>;

    /// Delete exactly the row the key selects under its literal
    /// interpretation.
    async fn delete_exact(&self, key: &LookupKey) -> StoreResult<()>;

    /// Delete all rows matching the key, reporting the matched-row count.
    async fn delete_matching(&self, key: &LookupKey) -> StoreResult<u64>;
}
