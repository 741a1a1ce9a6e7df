use async_trait::async_trait;
use kennel_core::error::{StorageError, StorageResult};
use kennel_core::record::{Puppy, PuppyId};
use kennel_core::store::RecordStore;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory implementation of the [`RecordStore`] contract.
///
/// Records live in one lock-guarded `Vec` owned by the store value, so
/// multiple independent stores can coexist in tests; there is no ambient
/// global collection. The single write lock gives the one-writer-at-a-time
/// discipline the contract requires, and the `Vec` preserves insertion
/// order for `find_all`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<Puppy>>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> StorageResult<RwLockReadGuard<'_, Vec<Puppy>>> {
        self.records
            .read()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))
    }

    fn write_guard(&self) -> StorageResult<RwLockWriteGuard<'_, Vec<Puppy>>> {
        self.records
            .write()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn insert(&self, record: Puppy) -> StorageResult<()> {
        let mut records = self.write_guard()?;

        if records.iter().any(|p| p.id == record.id) {
            return Err(StorageError::Conflict(record.id.to_string()));
        }

        records.push(record);
        Ok(())
    }

    async fn find_by_id(&self, id: &PuppyId) -> StorageResult<Option<Puppy>> {
        let records = self.read_guard()?;
        Ok(records.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Puppy>> {
        let records = self.read_guard()?;
        Ok(records.clone())
    }

    async fn replace(&self, id: &PuppyId, record: Puppy) -> StorageResult<bool> {
        let mut records = self.write_guard()?;

        let Some(pos) = records.iter().position(|p| p.id == *id) else {
            return Ok(false);
        };

        // Id uniqueness holds even when the replacement carries a new id.
        if record.id != *id && records.iter().any(|p| p.id == record.id) {
            return Err(StorageError::Conflict(record.id.to_string()));
        }

        records[pos] = record;
        Ok(true)
    }

    async fn remove_by_id(&self, id: &PuppyId) -> StorageResult<bool> {
        let mut records = self.write_guard()?;

        let Some(pos) = records.iter().position(|p| p.id == *id) else {
            return Ok(false);
        };

        records.remove(pos);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puppy(id: &str, name: &str) -> Puppy {
        Puppy {
            id: PuppyId::new(id),
            breed: "Maltese".to_string(),
            name: name.to_string(),
            birth_date: "2021-12-01".to_string(),
            image: None,
            info: None,
        }
    }

    #[tokio::test]
    async fn insert_and_find() {
        let store = InMemoryStore::new();

        store.insert(puppy("p-1", "Carlo")).await.unwrap();

        let found = store.find_by_id(&PuppyId::new("p-1")).await.unwrap().unwrap();
        assert_eq!(found.name, "Carlo");
    }

    #[tokio::test]
    async fn find_nonexistent() {
        let store = InMemoryStore::new();

        let found = store.find_by_id(&PuppyId::new("nope")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_conflict_on_duplicate_id() {
        let store = InMemoryStore::new();

        store.insert(puppy("p-1", "Carlo")).await.unwrap();
        let err = store.insert(puppy("p-1", "Gianni")).await.unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = InMemoryStore::new();

        store.insert(puppy("p-1", "Carlo")).await.unwrap();
        store.insert(puppy("p-2", "Gianni")).await.unwrap();
        store.insert(puppy("p-3", "Ugo")).await.unwrap();

        let names: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Carlo", "Gianni", "Ugo"]);
    }

    #[tokio::test]
    async fn replace_in_place() {
        let store = InMemoryStore::new();

        store.insert(puppy("p-1", "Carlo")).await.unwrap();
        let replaced = store
            .replace(&PuppyId::new("p-1"), puppy("p-1", "Ugo"))
            .await
            .unwrap();
        assert!(replaced);

        let found = store.find_by_id(&PuppyId::new("p-1")).await.unwrap().unwrap();
        assert_eq!(found.name, "Ugo");
    }

    #[tokio::test]
    async fn replace_under_new_id() {
        let store = InMemoryStore::new();

        store.insert(puppy("p-1", "Carlo")).await.unwrap();
        let replaced = store
            .replace(&PuppyId::new("p-1"), puppy("p-9", "Carlo"))
            .await
            .unwrap();
        assert!(replaced);

        assert!(store.find_by_id(&PuppyId::new("p-1")).await.unwrap().is_none());
        assert!(store.find_by_id(&PuppyId::new("p-9")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn replace_nonexistent_returns_false() {
        let store = InMemoryStore::new();

        let replaced = store
            .replace(&PuppyId::new("nope"), puppy("p-1", "Carlo"))
            .await
            .unwrap();
        assert!(!replaced);
    }

    #[tokio::test]
    async fn replace_onto_taken_id_conflicts() {
        let store = InMemoryStore::new();

        store.insert(puppy("p-1", "Carlo")).await.unwrap();
        store.insert(puppy("p-2", "Gianni")).await.unwrap();

        let err = store
            .replace(&PuppyId::new("p-1"), puppy("p-2", "Carlo"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = InMemoryStore::new();

        store.insert(puppy("p-1", "Carlo")).await.unwrap();

        assert!(store.remove_by_id(&PuppyId::new("p-1")).await.unwrap());
        assert!(!store.remove_by_id(&PuppyId::new("p-1")).await.unwrap());
        assert!(!store.remove_by_id(&PuppyId::new("never")).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(puppy(&format!("p-{:03}", i), &format!("Puppy{}", i)))
                    .await
                    .unwrap();
            }));
        }

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let _ = store.find_by_id(&PuppyId::new(format!("p-{:03}", i))).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.find_all().await.unwrap().len(), 10);
    }
}
