use async_trait::async_trait;
use chrono::{DateTime, Utc};
use funnel_core::FunnelResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata stored next to the board state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the envelope format
    pub format_version: u32,
    /// ID of the process that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FormatVersion::CURRENT.as_u32(),
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Serialized board state plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// JSON bytes of the `{ boards, activeBoard }` state
    pub data: Vec<u8>,
    pub metadata: PersistenceMetadata,
}

/// Backend holding the persisted blob (a file, an in-memory slot, ...)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Write a snapshot, replacing whatever was stored
    async fn save(&self, snapshot: StoreSnapshot) -> FunnelResult<PersistenceMetadata>;

    /// Read the stored snapshot, upgrading older formats on the way.
    /// `None` when nothing has been stored yet.
    async fn load(&self) -> FunnelResult<Option<(StoreSnapshot, PersistenceMetadata)>>;

    async fn exists(&self) -> bool;

    /// Where the blob lives, for log messages
    fn location(&self) -> String;
}

/// Serialization strategy for the state carried in a snapshot
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> FunnelResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> FunnelResult<T>;
}

/// Stored blob formats
///
/// - `V1`: the bare `{ boards, activeBoard }` object with no version tag
/// - `V2`: `{ version, metadata, data }` envelope around the V1 object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormatVersion {
    V1,
    V2,
}

impl FormatVersion {
    pub const CURRENT: FormatVersion = FormatVersion::V2;

    pub fn as_u32(self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            _ => None,
        }
    }
}
