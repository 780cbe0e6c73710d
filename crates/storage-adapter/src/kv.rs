//! Key-value persistence port.
//!
//! The recorder stores exactly one collection under one key, so the port is
//! deliberately tiny: get-with-default and set. Values are JSON; typing is
//! the caller's concern.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::errors::StorageError;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read `key`, or `default` when the key is absent.
    async fn get_or(&self, key: &str, default: Value) -> Result<Value, StorageError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Volatile store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get_or(&self, key: &str, default: Value) -> Result<Value, StorageError> {
        Ok(self.entries.read().get(key).cloned().unwrap_or(default))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file. The whole file is rewritten
/// on every set; with one small collection that is the honest trade.
pub struct JsonFileKvStore {
    path: PathBuf,
}

impl JsonFileKvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_map(&self) -> Result<HashMap<String, Value>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl KvStore for JsonFileKvStore {
    async fn get_or(&self, key: &str, default: Value) -> Result<Value, StorageError> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key).unwrap_or(default))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        let bytes = serde_json::to_vec_pretty(&map)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), %key, "persisted collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_store_returns_default_for_absent_key() {
        let store = MemoryKvStore::new();
        let value = store.get_or("recordings", json!([])).await.unwrap();
        assert_eq!(value, json!([]));

        store.set("recordings", json!([{"id": "a"}])).await.unwrap();
        let value = store.get_or("recordings", json!([])).await.unwrap();
        assert_eq!(value[0]["id"], "a");
    }

    #[tokio::test]
    async fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("recordings.json");

        let store = JsonFileKvStore::new(&path);
        assert_eq!(store.get_or("k", json!(null)).await.unwrap(), json!(null));
        store.set("k", json!({"n": 1})).await.unwrap();

        let reopened = JsonFileKvStore::new(&path);
        assert_eq!(
            reopened.get_or("k", json!(null)).await.unwrap(),
            json!({"n": 1})
        );
    }
}
