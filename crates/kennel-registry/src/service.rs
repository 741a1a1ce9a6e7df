use crate::generator::IdGenerator;
use async_trait::async_trait;
use kennel_core::error::Result;
use kennel_core::validate::{self, Mode};
use kennel_core::{Puppy, PuppyId, PuppyPayload, RecordStore, Registry, StorageError};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A concrete implementation of the [`Registry`] trait.
///
/// Composes a [`RecordStore`] backend with an [`IdGenerator`] policy and
/// runs each operation as validate → sanitize → identity → store. The
/// service itself is stateless between calls; it never retains a record
/// reference after a call returns.
#[derive(Debug, Clone)]
pub struct RegistryService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S: RecordStore, G: IdGenerator> RegistryService<S, G> {
    /// Creates a new registry over the given backend and identity policy.
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }

    fn assign_id(&self, payload: PuppyPayload) -> Result<Puppy> {
        let breed = payload.breed.as_deref().unwrap_or_default();
        let name = payload.name.as_deref().unwrap_or_default();
        let id = self.generator.generate(breed, name);
        Ok(payload.into_record(id)?)
    }

    /// Re-reads a freshly inserted record so the returned value reflects
    /// exactly what the backend stored.
    async fn fetch_stored(&self, id: PuppyId) -> Result<Puppy> {
        match self.store.find_by_id(&id).await? {
            Some(record) => Ok(record),
            // The insert landed, so a miss here is a racing delete or a
            // backend that lost the write; either way the read-back failed.
            None => Err(StorageError::Query(format!(
                "record {} not found on read-back after insert",
                id
            ))
            .into()),
        }
    }
}

#[async_trait]
impl<S: RecordStore, G: IdGenerator> Registry for RegistryService<S, G> {
    async fn create(&self, payload: PuppyPayload) -> Result<Puppy> {
        validate::validate(&payload, Mode::Strict)?;
        let payload = validate::sanitize(payload);

        let record = self.assign_id(payload.clone())?;
        match self.store.insert(record.clone()).await {
            Ok(()) => {
                debug!(id = %record.id, "created record");
                self.fetch_stored(record.id).await
            }
            Err(StorageError::Conflict(taken)) => {
                // The random suffix makes this astronomically unlikely;
                // regenerate once, then let a second conflict surface.
                warn!(id = %taken, "generated id collided, regenerating");
                let retry = self.assign_id(payload)?;
                self.store.insert(retry.clone()).await?;
                debug!(id = %retry.id, "created record after regeneration");
                self.fetch_stored(retry.id).await
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn get(&self, id: &PuppyId) -> Result<Option<Puppy>> {
        trace!(id = %id, "fetching record");
        Ok(self.store.find_by_id(id).await?)
    }

    async fn list(&self) -> Result<Vec<Puppy>> {
        trace!("listing records");
        Ok(self.store.find_all().await?)
    }

    async fn update(&self, id: &PuppyId, patch: PuppyPayload) -> Result<Option<Puppy>> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            trace!(id = %id, "update target not found");
            return Ok(None);
        };

        validate::validate(&patch, Mode::Partial)?;
        let patch = validate::sanitize(patch);

        let mut merged = patch.merge_into(existing);
        if self.generator.recomputes_on_update() {
            merged.id = self.generator.generate(&merged.breed, &merged.name);
        }
        let new_id = merged.id.clone();

        // A concurrent delete between the read and this write loses the
        // race: the replace lands on nothing and the update reports the
        // record as gone instead of resurrecting it.
        if !self.store.replace(id, merged).await? {
            trace!(id = %id, "update target vanished before write");
            return Ok(None);
        }

        match self.store.find_by_id(&new_id).await? {
            Some(record) => {
                debug!(old_id = %id, new_id = %new_id, "updated record");
                Ok(Some(record))
            }
            // A delete raced in after the replace landed; the delete wins
            // and the record is reported gone, same as a pre-write miss.
            None => {
                trace!(id = %new_id, "update target vanished after write");
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: &PuppyId) -> Result<bool> {
        let removed = self.store.remove_by_id(id).await?;
        debug!(id = %id, removed, "delete finished");
        Ok(removed)
    }
}
