use crate::traits::{FormatVersion, PersistenceMetadata, StoreSnapshot};
use funnel_core::{FunnelError, FunnelResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Versioned wrapper written to storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: Value,
}

impl JsonEnvelope {
    pub fn new(data: Value, metadata: PersistenceMetadata) -> Self {
        Self {
            version: FormatVersion::CURRENT.as_u32(),
            metadata,
            data,
        }
    }

    pub fn from_snapshot(snapshot: &StoreSnapshot) -> FunnelResult<Self> {
        let data: Value = serde_json::from_slice(&snapshot.data)
            .map_err(|e| FunnelError::Serialization(e.to_string()))?;
        Ok(Self::new(data, snapshot.metadata.clone()))
    }

    /// Parse a current-version envelope. Older formats must be upgraded by
    /// the migrator first.
    pub fn from_value(value: Value) -> FunnelResult<Self> {
        let envelope: Self =
            serde_json::from_value(value).map_err(|e| FunnelError::Serialization(e.to_string()))?;
        if envelope.version != FormatVersion::CURRENT.as_u32() {
            return Err(FunnelError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }

    pub fn into_snapshot(self) -> FunnelResult<StoreSnapshot> {
        let data =
            serde_json::to_vec(&self.data).map_err(|e| FunnelError::Serialization(e.to_string()))?;
        Ok(StoreSnapshot {
            data,
            metadata: self.metadata,
        })
    }

    pub fn to_bytes(&self) -> FunnelResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| FunnelError::Serialization(e.to_string()))
    }
}
