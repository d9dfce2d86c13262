use crate::store::JsonEnvelope;
use crate::traits::PersistenceMetadata;
use funnel_core::{FunnelError, FunnelResult};
use serde_json::Value;
use uuid::Uuid;

/// Wrap a bare V1 `{ boards, activeBoard }` blob in a V2 envelope.
///
/// The payload is carried over untouched; only the wrapper is new.
pub fn migrate(v1: Value) -> FunnelResult<Value> {
    if !v1.is_object() {
        return Err(FunnelError::Serialization(
            "V1 data must be a JSON object".to_string(),
        ));
    }
    let envelope = JsonEnvelope::new(v1, PersistenceMetadata::new(Uuid::new_v4()));
    serde_json::to_value(envelope).map_err(|e| FunnelError::Serialization(e.to_string()))
}

/// Check that a migrated document still carries the original V1 payload.
pub fn verify(original: &Value, migrated: &Value) -> FunnelResult<()> {
    migrated
        .get("version")
        .and_then(|v| v.as_u64())
        .filter(|&v| v == 2)
        .ok_or_else(|| {
            FunnelError::Serialization("Migrated data missing or invalid version field".to_string())
        })?;

    migrated
        .get("metadata")
        .filter(|m| m.is_object())
        .ok_or_else(|| {
            FunnelError::Serialization("Migrated data missing or invalid metadata field".to_string())
        })?;

    let data = migrated
        .get("data")
        .ok_or_else(|| FunnelError::Serialization("Migrated data missing data field".to_string()))?;

    if data != original {
        return Err(FunnelError::Serialization(
            "Migrated data does not match original data".to_string(),
        ));
    }
    Ok(())
}
