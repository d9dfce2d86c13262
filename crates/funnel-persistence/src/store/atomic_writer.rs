use funnel_core::FunnelResult;
use std::path::Path;
use tokio::fs;

/// Write-to-temp-then-rename file writer, so readers never see a half
/// written blob
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> FunnelResult<()> {
        // Temp file in the target directory keeps the rename on one filesystem
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    pub async fn read_all(path: &Path) -> FunnelResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("boards.json");

        AtomicWriter::write_atomic(&file_path, b"First")
            .await
            .unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second")
            .await
            .unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[tokio::test]
    async fn test_atomic_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("boards.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();
        assert!(file_path.exists());
    }

    #[tokio::test]
    async fn test_read_missing_is_io_error() {
        let dir = tempdir().unwrap();
        let err = AtomicWriter::read_all(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, funnel_core::FunnelError::Io(_)));
    }
}
