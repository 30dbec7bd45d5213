//! Record gateway: CRUD operations over a record collection.
//!
//! The gateway owns not-found and conflict semantics and resolves the
//! identifier-shape ambiguity that callers cannot: the UI only ever holds
//! the string form of a record id, while the store's primary key may be
//! declared as an integer or an opaque string. Lookups try the most literal
//! interpretation first and fall back progressively; the ambiguity never
//! surfaces to the caller unless every fallback is exhausted.

use std::sync::Arc;

use tracing::debug;

use crate::ident::LookupKey;
use crate::models::Validate;
use crate::store::{RecordStore, StoreError};
use crate::{AppError, Result};

/// CRUD gateway over one record collection.
#[derive(Clone)]
pub struct RecordGateway<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> RecordGateway<S> {
    /// Create a gateway over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Map a store failure into the application error taxonomy.
    fn classify(&self, err: StoreError) -> AppError {
        let collection = self.store.collection();
        match err {
            StoreError::NoMatch => AppError::NotFound(format!("{collection} not found")),
            StoreError::UniqueViolation(detail) => {
                AppError::Conflict(format!("{collection} already exists: {detail}"))
            }
            StoreError::ConstraintViolation(detail) => {
                AppError::Validation(format!("invalid {collection}: {detail}"))
            }
            StoreError::Corrupt(detail) => {
                AppError::Serialization(format!("{collection}: {detail}"))
            }
            StoreError::KeyMismatch(detail) | StoreError::Backend(detail) => {
                AppError::Db(format!("{collection}: {detail}"))
            }
        }
    }

    /// Materialize the full collection in its default display order.
    ///
    /// An empty collection is a valid, non-error result.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` on store failure, `AppError::Serialization`
    /// when a stored value cannot be made transport-safe.
    pub async fn list(&self) -> Result<Vec<S::Record>> {
        self.store.find_all().await.map_err(|err| self.classify(err))
    }

    /// Fetch one record by its externally supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no record matches the normalized
    /// key, `AppError::Db`/`AppError::Serialization` on store failure.
    pub async fn get(&self, raw_id: &str) -> Result<S::Record> {
        let key = LookupKey::normalize(raw_id);
        match self.store.find_by_key(&key).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(AppError::NotFound(format!(
                "{} {raw_id:?} not found",
                self.store.collection()
            ))),
            Err(err) => Err(self.classify(err)),
        }
    }

    /// Create a record; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for missing or malformed required
    /// fields, `AppError::Conflict` on a uniqueness violation, and
    /// `AppError::Db` for anything else.
    pub async fn create(&self, draft: S::Draft) -> Result<S::Record>
    where
        S::Draft: Validate,
    {
        draft.validate()?;
        self.store.insert(draft).await.map_err(|err| self.classify(err))
    }

    /// Delete one record by its externally supplied identifier.
    ///
    /// The id's true key shape is not reliably knowable from the string
    /// alone, so deletion walks a fallback chain:
    ///
    /// 1. attempt with the raw string as an opaque key — a structural
    ///    no-match here means the record provably does not exist;
    /// 2. on any other store error, retry with the integer interpretation
    ///    when the id is numeric-shaped;
    /// 3. if the direct attempts stay inconclusive, let a count-reporting
    ///    conditional delete arbitrate: zero matched rows means not found.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no interpretation of the id
    /// selects a row, `AppError::Internal` when the final fallback itself
    /// fails.
    pub async fn delete(&self, raw_id: &str) -> Result<()> {
        let collection = self.store.collection();
        let normalized = LookupKey::normalize(raw_id);
        let opaque = LookupKey::Opaque(raw_id.to_owned());

        match self.store.delete_exact(&opaque).await {
            Ok(()) => return Ok(()),
            Err(StoreError::NoMatch) => {
                return Err(AppError::NotFound(format!("{collection} {raw_id:?} not found")));
            }
            Err(err) => {
                debug!(key = %opaque, %err, "opaque delete attempt inconclusive");
            }
        }

        if normalized.is_numeric() {
            match self.store.delete_exact(&normalized).await {
                Ok(()) => return Ok(()),
                Err(StoreError::NoMatch) => {
                    return Err(AppError::NotFound(format!(
                        "{collection} {raw_id:?} not found"
                    )));
                }
                Err(err) => {
                    debug!(key = %normalized, %err, "numeric delete attempt inconclusive");
                }
            }
        }

        match self.store.delete_matching(&normalized).await {
            Ok(0) => Err(AppError::NotFound(format!("{collection} {raw_id:?} not found"))),
            Ok(rows) => {
                debug!(key = %normalized, rows, "conditional bulk delete resolved");
                Ok(())
            }
            Err(err) => Err(AppError::Internal(format!(
                "delete of {collection} id {raw_id:?} failed after opaque and numeric attempts: {err}"
            ))),
        }
    }
}
