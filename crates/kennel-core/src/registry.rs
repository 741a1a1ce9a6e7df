use crate::error::Result;
use crate::record::{Puppy, PuppyId, PuppyPayload};
use async_trait::async_trait;

/// The public contract of the record repository.
///
/// Every operation is stateless between calls and either fully succeeds or
/// fully fails; no partial application is visible to the caller. Not-found
/// is a normal outcome (`None` / `false`), never an error. Concurrent calls
/// on the same id race last-write-wins.
#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Validates the payload (strict), assigns a fresh id, and persists a
    /// complete record. Returns the record as re-read from the store.
    async fn create(&self, payload: PuppyPayload) -> Result<Puppy>;

    /// Exact-match lookup. `None` is a valid outcome, not a failure.
    async fn get(&self, id: &PuppyId) -> Result<Option<Puppy>>;

    /// Returns all records in backend-native order.
    async fn list(&self) -> Result<Vec<Puppy>>;

    /// Validates the patch (partial), merges it over the existing record,
    /// and writes the result back. Returns `None` without writing when the
    /// id is unknown. Under a slug-deriving generator the returned record
    /// carries a recomputed id.
    async fn update(&self, id: &PuppyId, patch: PuppyPayload) -> Result<Option<Puppy>>;

    /// Removes the record if present. Idempotent boolean result.
    async fn delete(&self, id: &PuppyId) -> Result<bool>;
}
