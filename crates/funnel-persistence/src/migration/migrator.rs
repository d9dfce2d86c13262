use crate::migration::v1_to_v2;
use crate::store::AtomicWriter;
use crate::traits::FormatVersion;
use funnel_core::{FunnelError, FunnelResult};
use serde_json::Value;
use std::path::Path;

type MigrationStep = fn(Value) -> FunnelResult<Value>;

/// One entry per format that can be upgraded: the step takes a document in
/// that format and returns it in the next one.
const MIGRATIONS: &[(FormatVersion, MigrationStep)] = &[(FormatVersion::V1, v1_to_v2::migrate)];

/// Orchestrates upgrades of stored blobs to the current format
pub struct Migrator;

impl Migrator {
    /// Detect the format of a parsed blob
    pub fn detect_version(value: &Value) -> FunnelResult<FormatVersion> {
        // V2+ blobs have a "version" field at root level
        if let Some(version) = value.get("version").and_then(|v| v.as_u64()) {
            return u32::try_from(version)
                .ok()
                .and_then(FormatVersion::from_u32)
                .ok_or_else(|| {
                    FunnelError::Serialization(format!("Unsupported format version: {}", version))
                });
        }

        // V1 blobs are the bare state object
        if value.is_object() {
            return Ok(FormatVersion::V1);
        }

        Err(FunnelError::Serialization(
            "Stored data is not a JSON object".to_string(),
        ))
    }

    /// Run every migration step needed to reach the current format.
    ///
    /// Returns the upgraded document and the version it started at.
    pub fn upgrade(value: Value) -> FunnelResult<(Value, FormatVersion)> {
        let original = Self::detect_version(&value)?;
        let mut version = original;
        let mut document = value;

        while version < FormatVersion::CURRENT {
            let step = MIGRATIONS
                .iter()
                .find(|(from, _)| *from == version)
                .map(|(_, step)| *step)
                .ok_or_else(|| {
                    FunnelError::Serialization(format!("No migration from {:?}", version))
                })?;

            let before = version;
            document = step(document)?;
            version = Self::detect_version(&document)?;
            if version <= before {
                return Err(FunnelError::Internal(format!(
                    "Migration from {:?} did not advance the format",
                    before
                )));
            }
            tracing::info!("Migrated stored data from {:?} to {:?}", before, version);
        }

        Ok((document, original))
    }

    /// Upgrade a file in place. Returns whether a migration happened.
    ///
    /// A `.v1.backup` copy is made first and removed only once the rewritten
    /// file has been read back and checked.
    pub async fn migrate_file(path: &Path) -> FunnelResult<bool> {
        if !path.exists() {
            return Ok(false);
        }

        let bytes = AtomicWriter::read_all(path).await?;
        let original: Value =
            serde_json::from_slice(&bytes).map_err(|e| FunnelError::Serialization(e.to_string()))?;

        if Self::detect_version(&original)? == FormatVersion::CURRENT {
            return Ok(false);
        }

        tracing::info!(
            "Detected outdated format at {}. Starting migration...",
            path.display()
        );

        let backup_path = path.with_extension("v1.backup");
        tokio::fs::copy(path, &backup_path).await?;
        tracing::info!("Created backup at {}", backup_path.display());

        let (upgraded, _) = Self::upgrade(original.clone())?;
        let json_bytes = serde_json::to_vec_pretty(&upgraded)
            .map_err(|e| FunnelError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(path, &json_bytes).await?;

        match Self::verify_file(path, &original).await {
            Ok(()) => {
                if let Err(e) = tokio::fs::remove_file(&backup_path).await {
                    tracing::warn!(
                        "Migration successful but failed to remove backup at {}: {}",
                        backup_path.display(),
                        e
                    );
                } else {
                    tracing::info!("Migration verified, backup removed");
                }
                Ok(true)
            }
            Err(e) => {
                tracing::error!(
                    "Migration verification failed: {}. Backup preserved at {}",
                    e,
                    backup_path.display()
                );
                Err(e)
            }
        }
    }

    async fn verify_file(path: &Path, original: &Value) -> FunnelResult<()> {
        let migrated_bytes = AtomicWriter::read_all(path).await?;
        let migrated: Value = serde_json::from_slice(&migrated_bytes).map_err(|e| {
            FunnelError::Serialization(format!("Failed to parse migrated file: {}", e))
        })?;
        v1_to_v2::verify(original, &migrated)?;
        tracing::debug!("Migration verification passed");
        Ok(())
    }
}
