//! Typed access to the persisted recording collection.
//!
//! The whole collection lives under one key in the key-value port. Each
//! mutation is a read-modify-write cycle; within one authority the loop
//! serializes these, but two authorities sharing a store race with
//! last-write-wins semantics. That race is a documented limitation of the
//! storage contract, not something this layer papers over.

use std::sync::Arc;

use action_model::SavedRecording;
use flowrec_core_types::RecordingId;
use serde_json::json;
use storage_adapter::{KvStore, StorageError};
use tracing::debug;

pub struct RecordingVault {
    store: Arc<dyn KvStore>,
    key: String,
}

impl RecordingVault {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub async fn list(&self) -> Result<Vec<SavedRecording>, StorageError> {
        let value = self.store.get_or(&self.key, json!([])).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Newest first, matching how surfaces present the collection.
    pub async fn prepend(&self, recording: SavedRecording) -> Result<(), StorageError> {
        let mut collection = self.list().await?;
        collection.insert(0, recording);
        self.write(collection).await
    }

    /// Removing an absent id succeeds and leaves the collection untouched.
    pub async fn delete(&self, id: &RecordingId) -> Result<(), StorageError> {
        let collection = self.list().await?;
        let remaining: Vec<SavedRecording> = collection
            .into_iter()
            .filter(|recording| &recording.id != id)
            .collect();
        debug!(%id, remaining = remaining.len(), "deleted recording");
        self.write(remaining).await
    }

    pub async fn find(&self, id: &RecordingId) -> Result<Option<SavedRecording>, StorageError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|recording| &recording.id == id))
    }

    async fn write(&self, collection: Vec<SavedRecording>) -> Result<(), StorageError> {
        let value = serde_json::to_value(collection)?;
        self.store.set(&self.key, value).await
    }
}
