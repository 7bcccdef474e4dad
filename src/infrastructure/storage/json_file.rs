//! Flat-file JSON storage implementation
//!
//! Each entity collection lives in `<data_dir>/<collection>.json` as a JSON
//! object keyed by entity key. Writes go through an in-memory cache and are
//! persisted on every mutation, with the previous file kept as `.json.bak`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// JSON flat-file storage backend
#[derive(Debug)]
pub struct JsonFileStorage<E>
where
    E: StorageEntity,
{
    path: PathBuf,
    backup_path: PathBuf,
    cache: RwLock<HashMap<String, E>>,
}

impl<E> JsonFileStorage<E>
where
    E: StorageEntity + 'static,
{
    /// Opens (or creates) the collection file under `data_dir`
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let data_dir = data_dir.into();

        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to create data directory '{}': {}",
                data_dir.display(),
                e
            ))
        })?;

        let path = data_dir.join(format!("{}.json", E::collection()));
        let backup_path = data_dir.join(format!("{}.json.bak", E::collection()));

        let cache = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                DomainError::storage(format!(
                    "Failed to parse '{}': {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read '{}': {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            backup_path,
            cache: RwLock::new(cache),
        })
    }

    /// Writes the given snapshot to disk, keeping the previous file as backup
    async fn persist(&self, snapshot: &HashMap<String, E>) -> Result<(), DomainError> {
        let serialized = serde_json::to_string_pretty(snapshot)
            .map_err(|e| DomainError::storage(format!("Failed to serialize collection: {}", e)))?;

        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            tokio::fs::copy(&self.path, &self.backup_path)
                .await
                .map_err(|e| {
                    DomainError::storage(format!(
                        "Failed to write backup '{}': {}",
                        self.backup_path.display(),
                        e
                    ))
                })?;
        }

        tokio::fs::write(&self.path, serialized).await.map_err(|e| {
            DomainError::storage(format!("Failed to write '{}': {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl<E> Storage<E> for JsonFileStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let cache = self.cache.read().await;
        Ok(cache.get(key.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let cache = self.cache.read().await;
        Ok(cache.values().cloned().collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut cache = self.cache.write().await;

        if cache.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        cache.insert(key, entity.clone());
        self.persist(&cache).await?;

        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut cache = self.cache.write().await;

        if !cache.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Entity with key '{}' not found",
                key
            )));
        }

        cache.insert(key, entity.clone());
        self.persist(&cache).await?;

        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut cache = self.cache.write().await;

        let removed = cache.remove(key.as_str()).is_some();

        if removed {
            self.persist(&cache).await?;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntity {
        id: String,
        name: String,
    }

    impl StorageEntity for TestEntity {
        type Key = String;

        fn key(&self) -> &Self::Key {
            &self.id
        }

        fn collection() -> &'static str {
            "test_entities"
        }
    }

    fn entity(id: &str, name: &str) -> TestEntity {
        TestEntity {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let dir = TempDir::new().unwrap();
        let storage: JsonFileStorage<TestEntity> =
            JsonFileStorage::open(dir.path()).await.unwrap();

        storage.create(entity("1", "Test")).await.unwrap();

        let result = storage.get(&"1".to_string()).await.unwrap();
        assert_eq!(result, Some(entity("1", "Test")));
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let storage: JsonFileStorage<TestEntity> =
                JsonFileStorage::open(dir.path()).await.unwrap();
            storage.create(entity("1", "Persisted")).await.unwrap();
        }

        let reopened: JsonFileStorage<TestEntity> =
            JsonFileStorage::open(dir.path()).await.unwrap();

        let result = reopened.get(&"1".to_string()).await.unwrap();
        assert_eq!(result, Some(entity("1", "Persisted")));
    }

    #[tokio::test]
    async fn test_backup_written_on_second_mutation() {
        let dir = TempDir::new().unwrap();
        let storage: JsonFileStorage<TestEntity> =
            JsonFileStorage::open(dir.path()).await.unwrap();

        storage.create(entity("1", "First")).await.unwrap();
        storage.create(entity("2", "Second")).await.unwrap();

        let backup = dir.path().join("test_entities.json.bak");
        assert!(backup.exists());

        // Backup holds the state before the last write
        let contents = std::fs::read_to_string(backup).unwrap();
        let parsed: HashMap<String, TestEntity> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let dir = TempDir::new().unwrap();
        let storage: JsonFileStorage<TestEntity> =
            JsonFileStorage::open(dir.path()).await.unwrap();

        storage.create(entity("1", "Test")).await.unwrap();
        let result = storage.create(entity("1", "Dup")).await;

        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let dir = TempDir::new().unwrap();
        let storage: JsonFileStorage<TestEntity> =
            JsonFileStorage::open(dir.path()).await.unwrap();

        let result = storage.update(entity("missing", "X")).await;
        assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = TempDir::new().unwrap();
        let storage: JsonFileStorage<TestEntity> =
            JsonFileStorage::open(dir.path()).await.unwrap();

        storage.create(entity("1", "Test")).await.unwrap();

        assert!(storage.delete(&"1".to_string()).await.unwrap());
        assert!(!storage.delete(&"1".to_string()).await.unwrap());
        assert!(storage.get(&"1".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("test_entities.json"), "not json").unwrap();

        let result: Result<JsonFileStorage<TestEntity>, _> =
            JsonFileStorage::open(dir.path()).await;

        assert!(result.is_err());
    }
}
