use crate::migration::Migrator;
use crate::store::JsonEnvelope;
use crate::traits::{FormatVersion, PersistenceMetadata, PersistenceStore, StoreSnapshot};
use funnel_core::{FunnelError, FunnelResult};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Key the boards blob is stored under by default
pub const DEFAULT_KEY: &str = "funnel-boards";

/// A single named blob slot held in memory, the way a browser keeps the
/// state under one local-storage key.
///
/// Clones share the same slot.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    key: String,
    blob: Arc<Mutex<Option<Vec<u8>>>>,
    instance_id: Uuid,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            blob: Arc::new(Mutex::new(None)),
            instance_id: Uuid::new_v4(),
        }
    }

    /// Slot pre-filled with raw bytes, in any supported format
    pub fn with_blob(key: impl Into<String>, bytes: Vec<u8>) -> Self {
        let store = Self::new(key);
        *store.blob.lock() = Some(bytes);
        store
    }

    /// Current raw contents of the slot
    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob.lock().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for MemoryStore {
    async fn save(&self, mut snapshot: StoreSnapshot) -> FunnelResult<PersistenceMetadata> {
        snapshot.metadata.instance_id = self.instance_id;
        snapshot.metadata.saved_at = chrono::Utc::now();

        let bytes = JsonEnvelope::from_snapshot(&snapshot)?.to_bytes()?;
        tracing::debug!("Stored {} bytes under {}", bytes.len(), self.key);
        *self.blob.lock() = Some(bytes);

        Ok(snapshot.metadata)
    }

    async fn load(&self) -> FunnelResult<Option<(StoreSnapshot, PersistenceMetadata)>> {
        let Some(bytes) = self.blob() else {
            return Ok(None);
        };

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| FunnelError::Serialization(e.to_string()))?;
        let (upgraded, from) = Migrator::upgrade(value)?;
        let envelope = JsonEnvelope::from_value(upgraded)?;

        if from != FormatVersion::CURRENT {
            *self.blob.lock() = Some(envelope.to_bytes()?);
            tracing::info!("Upgraded blob under {} from {:?}", self.key, from);
        }

        let metadata = envelope.metadata.clone();
        Ok(Some((envelope.into_snapshot()?, metadata)))
    }

    async fn exists(&self) -> bool {
        self.blob.lock().is_some()
    }

    fn location(&self) -> String {
        format!("memory:{}", self.key)
    }
}
