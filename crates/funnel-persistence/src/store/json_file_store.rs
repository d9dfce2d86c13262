use crate::migration::Migrator;
use crate::store::{AtomicWriter, JsonEnvelope};
use crate::traits::{PersistenceMetadata, PersistenceStore, StoreSnapshot};
use funnel_core::{FunnelError, FunnelResult};
use serde_json::Value;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Board state persisted as a JSON envelope in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_instance_id(path, Uuid::new_v4())
    }

    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, mut snapshot: StoreSnapshot) -> FunnelResult<PersistenceMetadata> {
        snapshot.metadata.instance_id = self.instance_id;
        snapshot.metadata.saved_at = chrono::Utc::now();

        let envelope = JsonEnvelope::from_snapshot(&snapshot)?;
        let json_bytes = envelope.to_bytes()?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );

        Ok(snapshot.metadata)
    }

    async fn load(&self) -> FunnelResult<Option<(StoreSnapshot, PersistenceMetadata)>> {
        if !self.path.exists() {
            tracing::debug!("No data file at {}", self.path.display());
            return Ok(None);
        }

        if Migrator::migrate_file(&self.path).await? {
            tracing::info!("Upgraded {} to the current format", self.path.display());
        }

        let file_bytes = AtomicWriter::read_all(&self.path).await?;
        let value: Value = serde_json::from_slice(&file_bytes)
            .map_err(|e| FunnelError::Serialization(e.to_string()))?;
        let envelope = JsonEnvelope::from_value(value)?;
        let metadata = envelope.metadata.clone();
        let snapshot = envelope.into_snapshot()?;

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );

        Ok(Some((snapshot, metadata)))
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
