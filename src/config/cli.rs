use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        tokio::fs::write(self.resolve(path), data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("Output.txt", b"Ten\n").await.unwrap();
        assert_eq!(storage.read_file("Output.txt").await.unwrap(), b"Ten\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_file("input.txt").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::CalcError::IoError(_)));
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(storage.write_file("missing/Output.txt", b"").await.is_err());
    }
}
