use crate::error::StorageResult;
use crate::record::{Puppy, PuppyId};
use async_trait::async_trait;

/// Contract for a record store backend.
///
/// Implementations own the storage lifetime of the records and perform the
/// five primitives the registry composes its operations from. Each primitive
/// is a single atomic call from the caller's point of view; none of them is
/// composed transactionally with a preceding read. Backend-unavailable is
/// always reported as a distinct error, never conflated with not-found.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Persists a new record. Returns `Err(Conflict)` if the id is taken.
    async fn insert(&self, record: Puppy) -> StorageResult<()>;

    /// Exact-match lookup by id. Returns `None` if the id does not exist.
    async fn find_by_id(&self, id: &PuppyId) -> StorageResult<Option<Puppy>>;

    /// Returns all records. Ordering is backend-native: insertion order for
    /// the in-memory store, store order for the persistent one. Callers
    /// must not depend on it.
    async fn find_all(&self) -> StorageResult<Vec<Puppy>>;

    /// Replaces the record stored under `id` with `record`, which may carry
    /// a different id. Returns `false` if `id` does not exist.
    async fn replace(&self, id: &PuppyId, record: Puppy) -> StorageResult<bool>;

    /// Removes the record matching `id` if present. Idempotent: returns
    /// `true` only when a record was actually removed.
    async fn remove_by_id(&self, id: &PuppyId) -> StorageResult<bool>;
}
