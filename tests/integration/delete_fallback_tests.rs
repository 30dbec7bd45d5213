//! Delete fallback state machine tests against a scripted store.
//!
//! The real `SQLite` stores only produce a subset of the error space, so
//! these tests drive the gateway with a store whose direct-delete attempts
//! stay ambiguous, forcing the count-reporting bulk fallback to arbitrate.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use rs_people::gateway::RecordGateway;
use rs_people::ident::LookupKey;
use rs_people::store::{RecordStore, StoreError, StoreResult};
use rs_people::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Widget {
    id: String,
}

/// Store whose exact deletes always report an ambiguous error, with a
/// configurable bulk-delete outcome.
struct AmbiguousStore {
    bulk_count: Option<u64>,
    exact_attempts: AtomicU64,
    opaque_first: AtomicU64,
}

impl AmbiguousStore {
    fn new(bulk_count: Option<u64>) -> Self {
        Self {
            bulk_count,
            exact_attempts: AtomicU64::new(0),
            opaque_first: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl RecordStore for AmbiguousStore {
    type Record = Widget;
    type Draft = Widget;

    fn collection(&self) -> &'static str {
        "widget"
    }

    async fn find_all(&self) -> StoreResult<Vec<Widget>> {
        Ok(Vec::new())
    }

    async fn find_by_key(&self, _key: &LookupKey) -> StoreResult<Option<Widget>> {
        Ok(None)
    }

    async fn insert(&self, draft: Widget) -> StoreResult<Widget> {
        Ok(draft)
    }

    async fn delete_exact(&self, key: &LookupKey) -> StoreResult<()> {
        let attempt = self.exact_attempts.fetch_add(1, Ordering::SeqCst);
        if attempt == 0 && matches!(key, LookupKey::Opaque(_)) {
            self.opaque_first.store(1, Ordering::SeqCst);
        }
        Err(StoreError::KeyMismatch("scripted ambiguity".into()))
    }

    async fn delete_matching(&self, _key: &LookupKey) -> StoreResult<u64> {
        self.bulk_count
            .ok_or_else(|| StoreError::Backend("scripted backend failure".into()))
    }
}

/// Store that reports a structural no-match on every exact delete and
/// panics if the bulk fallback is ever reached.
struct StructuralStore {
    exact_attempts: AtomicU64,
}

#[async_trait]
impl RecordStore for StructuralStore {
    type Record = Widget;
    type Draft = Widget;

    fn collection(&self) -> &'static str {
        "widget"
    }

    async fn find_all(&self) -> StoreResult<Vec<Widget>> {
        Ok(Vec::new())
    }

    async fn find_by_key(&self, _key: &LookupKey) -> StoreResult<Option<Widget>> {
        Ok(None)
    }

    async fn insert(&self, draft: Widget) -> StoreResult<Widget> {
        Ok(draft)
    }

    async fn delete_exact(&self, _key: &LookupKey) -> StoreResult<()> {
        self.exact_attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::NoMatch)
    }

    async fn delete_matching(&self, _key: &LookupKey) -> StoreResult<u64> {
        panic!("bulk fallback must not run after a structural no-match");
    }
}

#[tokio::test]
async fn ambiguous_attempts_fall_back_to_bulk_delete_success() {
    let store = Arc::new(AmbiguousStore::new(Some(1)));
    let gateway = RecordGateway::new(Arc::clone(&store));

    gateway.delete("42").await.expect("bulk fallback resolves");
    // Numeric-shaped id: opaque attempt first, then the numeric retry.
    assert_eq!(store.exact_attempts.load(Ordering::SeqCst), 2);
    assert_eq!(store.opaque_first.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bulk_count_of_zero_is_not_found() {
    let store = Arc::new(AmbiguousStore::new(Some(0)));
    let gateway = RecordGateway::new(Arc::clone(&store));

    let err = gateway.delete("42").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err}");
}

#[tokio::test]
async fn non_numeric_id_skips_the_numeric_retry() {
    let store = Arc::new(AmbiguousStore::new(Some(1)));
    let gateway = RecordGateway::new(Arc::clone(&store));

    gateway.delete("abc").await.expect("bulk fallback resolves");
    assert_eq!(
        store.exact_attempts.load(Ordering::SeqCst),
        1,
        "no numeric retry for a non-numeric-shaped id"
    );
}

#[tokio::test]
async fn failing_bulk_fallback_is_an_internal_error() {
    let store = Arc::new(AmbiguousStore::new(None));
    let gateway = RecordGateway::new(Arc::clone(&store));

    let err = gateway.delete("42").await.unwrap_err();
    assert!(matches!(err, AppError::Internal(_)), "got {err}");
    // Diagnostic detail names the attempted interpretations.
    assert!(err.to_string().contains("opaque"));
    assert!(err.to_string().contains("numeric"));
}

#[tokio::test]
async fn structural_no_match_settles_immediately() {
    let store = Arc::new(StructuralStore { exact_attempts: AtomicU64::new(0) });
    let gateway = RecordGateway::new(Arc::clone(&store));

    let err = gateway.delete("123").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err}");
    assert_eq!(
        store.exact_attempts.load(Ordering::SeqCst),
        1,
        "a structural no-match on the opaque attempt is final"
    );
}
